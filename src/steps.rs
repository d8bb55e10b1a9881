//! Wizard step sequencing
//!
//! An ordered list of stages with gated forward motion and free backward
//! motion. Each step carries one non-throwing gate predicate: a failing
//! gate disables the forward action, it never raises an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::booking::BookingConfig;
use crate::types::{CoverageTag, VehicleClass};

/// Wizard stages in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Step {
    /// Vehicle class, subtype, and detail entry
    Vehicle = 0,
    /// Coverage tag selection
    Coverage = 1,
    /// Film grade selection
    Film = 2,
    /// Date and slot selection
    Appointment = 3,
    /// Contact information
    Details = 4,
    /// Review and confirm; its continue triggers submission
    Review = 5,
    /// Terminal stage after a confirmed booking
    Success = 6,
}

impl Step {
    /// All stages in order. This ordering is a contract with any host page
    /// embedding the wizard.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Vehicle,
            Self::Coverage,
            Self::Film,
            Self::Appointment,
            Self::Details,
            Self::Review,
            Self::Success,
        ]
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Stage identifier used by host pages.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Coverage => "coverage",
            Self::Film => "film",
            Self::Appointment => "appointment",
            Self::Details => "details",
            Self::Review => "review",
            Self::Success => "success",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Vehicle => "Vehicle",
            Self::Coverage => "Coverage",
            Self::Film => "Film Grade",
            Self::Appointment => "Availability",
            Self::Details => "Your Details",
            Self::Review => "Review & Confirm",
            Self::Success => "Booking Confirmed",
        }
    }

    /// Gate predicate deciding whether forward navigation leaves this step.
    pub fn gate_passes(self, cfg: &BookingConfig) -> bool {
        match self {
            Self::Vehicle => {
                let Some(class) = cfg.vehicle().class else {
                    return false;
                };
                if matches!(class, VehicleClass::Truck | VehicleClass::Suv) {
                    cfg.vehicle().subtype.is_some()
                } else {
                    true
                }
            }
            Self::Coverage => !cfg.coverage().is_empty(),
            Self::Film => {
                // A lone sun strip needs no film grade
                if cfg.coverage() == [CoverageTag::SunStrip] {
                    true
                } else {
                    cfg.film().tier.is_some()
                }
            }
            Self::Appointment => cfg.schedule().start.is_some(),
            Self::Details => {
                let attendee = cfg.attendee();
                !attendee.first_name.is_empty()
                    && !attendee.last_name.is_empty()
                    && !attendee.email.is_empty()
                    && cfg.contact().phone.is_some()
            }
            Self::Review => true,
            Self::Success => false,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Transient navigation direction. Purely presentational (slide animation
/// hint); carries no business meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Tracks the current position in the stage list and applies the
/// navigation rules: gated forward motion, free backward motion.
#[derive(Debug, Clone, Default)]
pub struct StepSequencer {
    current: usize,
    direction: Direction,
}

impl StepSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> Step {
        Step::all()[self.current]
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Completion percentage for progress displays.
    pub fn progress_percent(&self) -> u8 {
        (((self.current + 1) * 100) / Step::all().len()) as u8
    }

    /// Move forward one stage if the active gate passes against the model.
    ///
    /// A failing gate (or being at the final stage) is a silent no-op, not
    /// an error. Returns whether the position changed.
    pub fn advance(&mut self, cfg: &BookingConfig) -> bool {
        if self.current + 1 >= Step::all().len() {
            return false;
        }
        if !self.current_step().gate_passes(cfg) {
            debug!(step = %self.current_step(), "gate closed; advance ignored");
            return false;
        }
        self.current += 1;
        self.direction = Direction::Forward;
        true
    }

    /// Move back one stage. Always permitted except at the first stage;
    /// never re-validates.
    pub fn retreat(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.direction = Direction::Backward;
        true
    }

    /// Jump to an arbitrary stage index.
    ///
    /// Backward jumps are unconditional. Forward jumps require the active
    /// gate to pass, equivalent to one `advance()`. Returns whether the
    /// position changed.
    pub fn jump_to(&mut self, index: usize, cfg: &BookingConfig) -> bool {
        if index >= Step::all().len() || index == self.current {
            return false;
        }
        if index < self.current {
            self.current = index;
            self.direction = Direction::Backward;
            return true;
        }
        if self.current_step().gate_passes(cfg) {
            self.current = index;
            self.direction = Direction::Forward;
            return true;
        }
        debug!(step = %self.current_step(), "gate closed; jump ignored");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FilmTier, VehicleSubtype};

    fn ready_vehicle() -> BookingConfig {
        let mut cfg = BookingConfig::new();
        cfg.set_vehicle_class(VehicleClass::Car);
        cfg.set_vehicle_subtype(VehicleSubtype::Sedan);
        cfg
    }

    #[test]
    fn test_step_order_is_sequential() {
        for (i, step) in Step::all().iter().enumerate() {
            assert_eq!(step.index(), i);
        }
        assert_eq!(Step::all().len(), 7);
    }

    #[test]
    fn test_advance_blocked_without_vehicle_class() {
        let mut seq = StepSequencer::new();
        let cfg = BookingConfig::new();
        assert!(!seq.advance(&cfg));
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn test_vehicle_gate_requires_subtype_for_trucks() {
        let mut cfg = BookingConfig::new();
        cfg.set_vehicle_class(VehicleClass::Truck);
        assert!(!Step::Vehicle.gate_passes(&cfg));
        cfg.set_vehicle_subtype(VehicleSubtype::CrewCab);
        assert!(Step::Vehicle.gate_passes(&cfg));
    }

    #[test]
    fn test_suv_passes_vehicle_gate_via_implicit_subtype() {
        let mut cfg = BookingConfig::new();
        cfg.set_vehicle_class(VehicleClass::Suv);
        assert!(Step::Vehicle.gate_passes(&cfg));
    }

    #[test]
    fn test_advance_moves_when_gate_open() {
        let mut seq = StepSequencer::new();
        let cfg = ready_vehicle();
        assert!(seq.advance(&cfg));
        assert_eq!(seq.current_step(), Step::Coverage);
        assert_eq!(seq.direction(), Direction::Forward);
    }

    #[test]
    fn test_film_gate_bypassed_for_lone_sun_strip() {
        let mut cfg = ready_vehicle();
        cfg.toggle_coverage(CoverageTag::SunStrip);
        assert!(Step::Film.gate_passes(&cfg));

        cfg.toggle_coverage(CoverageTag::SidesRear);
        assert!(!Step::Film.gate_passes(&cfg));
        cfg.set_film_tier(FilmTier::Cs);
        assert!(Step::Film.gate_passes(&cfg));
    }

    #[test]
    fn test_details_gate_requires_all_contact_fields() {
        let mut cfg = ready_vehicle();
        assert!(!Step::Details.gate_passes(&cfg));
        cfg.set_attendee_name("Ada", "Lovelace");
        cfg.set_email("ada@example.com");
        assert!(!Step::Details.gate_passes(&cfg));
        cfg.set_phone("5551234567");
        assert!(Step::Details.gate_passes(&cfg));
    }

    #[test]
    fn test_retreat_always_allowed_except_first() {
        let mut seq = StepSequencer::new();
        assert!(!seq.retreat());

        let cfg = ready_vehicle();
        seq.advance(&cfg);
        assert!(seq.retreat());
        assert_eq!(seq.current_index(), 0);
        assert_eq!(seq.direction(), Direction::Backward);
    }

    #[test]
    fn test_jump_backward_unconditional() {
        let mut cfg = ready_vehicle();
        cfg.toggle_coverage(CoverageTag::SidesRear);
        cfg.set_film_tier(FilmTier::Xr);

        let mut seq = StepSequencer::new();
        seq.advance(&cfg);
        seq.advance(&cfg);
        seq.advance(&cfg);
        assert_eq!(seq.current_step(), Step::Appointment);

        // Backward jump needs no gate even though appointment is incomplete
        assert!(seq.jump_to(0, &cfg));
        assert_eq!(seq.current_step(), Step::Vehicle);
    }

    #[test]
    fn test_jump_forward_requires_active_gate() {
        let mut seq = StepSequencer::new();
        let empty = BookingConfig::new();
        assert!(!seq.jump_to(2, &empty));
        assert_eq!(seq.current_index(), 0);

        let cfg = ready_vehicle();
        assert!(seq.jump_to(2, &cfg));
        assert_eq!(seq.current_step(), Step::Film);
    }

    #[test]
    fn test_no_advance_past_success() {
        let mut cfg = ready_vehicle();
        cfg.toggle_coverage(CoverageTag::SunStrip);
        cfg.set_attendee_name("Ada", "Lovelace");
        cfg.set_email("ada@example.com");
        cfg.set_phone("5551234567");
        cfg.choose_start(chrono::Utc::now());

        let mut seq = StepSequencer::new();
        while seq.advance(&cfg) {}
        assert_eq!(seq.current_step(), Step::Success);
        assert!(!seq.advance(&cfg));
    }

    #[test]
    fn test_review_gate_always_passes() {
        assert!(Step::Review.gate_passes(&BookingConfig::new()));
    }
}
