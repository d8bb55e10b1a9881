//! Booking session context
//!
//! One `BookingSession` exists per visible wizard session. It owns the
//! aggregate, the step sequencer, and the availability tracker, and is
//! passed by reference to whatever needs them; there is no ambient
//! singleton. The session dies with the wizard: nothing here persists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::booking::BookingConfig;
use crate::error::{Result, TintBookError};
use crate::schedule::{Availability, AvailabilityTracker, FetchPolicy, Slot, SlotSource};
use crate::steps::{Step, StepSequencer};

/// Receipt from the terminal confirm stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub confirmation_id: String,
}

/// Session-scoped context for one customer walking the wizard.
#[derive(Debug, Default)]
pub struct BookingSession {
    config: BookingConfig,
    sequencer: StepSequencer,
    availability: AvailabilityTracker,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FetchPolicy) -> Self {
        Self {
            availability: AvailabilityTracker::new(policy),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Mutable access to the aggregate. The aggregate enforces its own
    /// invariants, so handing it out does not bypass the derivation pass.
    pub fn config_mut(&mut self) -> &mut BookingConfig {
        &mut self.config
    }

    pub fn current_step(&self) -> Step {
        self.sequencer.current_step()
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    pub fn availability(&self) -> &Availability {
        self.availability.state()
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Gated forward motion; silent no-op on a closed gate.
    pub fn advance(&mut self) -> bool {
        self.sequencer.advance(&self.config)
    }

    /// Free backward motion.
    pub fn retreat(&mut self) -> bool {
        self.sequencer.retreat()
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        self.sequencer.jump_to(index, &self.config)
    }

    /// Whether the forward action should be enabled right now.
    pub fn can_proceed(&self) -> bool {
        self.current_step().gate_passes(&self.config)
    }

    // ------------------------------------------------------------------
    // Appointment
    // ------------------------------------------------------------------

    /// Select a date: supersedes any outstanding fetch and loads slots for
    /// it, sized by the configured service duration.
    pub fn select_date(&mut self, source: &dyn SlotSource, date: NaiveDate) -> &Availability {
        let hint = self.config.estimated_duration_min();
        self.availability.fetch(source, date, hint)
    }

    /// Choose one of the loaded slots. Taken slots are not selectable;
    /// returns whether the start instant was set.
    pub fn choose_slot(&mut self, slot: &Slot) -> bool {
        if !slot.available {
            return false;
        }
        self.config.choose_start(slot.start_time);
        true
    }

    // ------------------------------------------------------------------
    // Terminal transition
    // ------------------------------------------------------------------

    /// Confirm the booking from the review stage.
    ///
    /// Stub standing in for the real scheduling backend: it checks that
    /// every preceding gate passes, mints a confirmation id, and moves the
    /// wizard to the success stage.
    pub fn submit(&mut self) -> Result<Confirmation> {
        if self.current_step() != Step::Review {
            return Err(TintBookError::submission(format!(
                "cannot confirm from the {} stage",
                self.current_step()
            )));
        }
        for step in Step::all() {
            if step.is_terminal() || *step == Step::Review {
                continue;
            }
            if !step.gate_passes(&self.config) {
                return Err(TintBookError::submission(format!(
                    "the {step} stage is incomplete"
                )));
            }
        }

        let confirmation = Confirmation {
            confirmation_id: Uuid::new_v4().to_string(),
        };
        info!(
            id = %confirmation.confirmation_id,
            variant = %self.config.derived().variant_code,
            price = self.config.derived().estimated_price,
            "booking confirmed"
        );
        self.sequencer.advance(&self.config);
        Ok(confirmation)
    }
}
