//! Booking configuration aggregate
//!
//! The single mutable aggregate behind the wizard: attendee identity,
//! schedule selection, and the vehicle/coverage/film/contact field set,
//! plus read-only derived outputs. One aggregate exists per session, in
//! memory only, discarded when the session ends.
//!
//! Every mutation funnels through a method here and finishes by re-running
//! the derivation engine, so the derived fields can never drift from the
//! inputs they were computed from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::coverage;
use crate::derive::{self, Derived};
use crate::input;
use crate::types::{
    ContactChannel, CoverageTag, FilmTier, TintLevel, VehicleClass, VehicleSubtype,
};

/// Cal-style event type backing every tint appointment.
pub const TINT_EVENT_TYPE_ID: u32 = 6;

/// Who the appointment is for. Mutated at the details stage only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub time_zone: String,
    pub locale: String,
}

impl Default for Attendee {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            // The host page injects the browser zone; UTC until then
            time_zone: "UTC".to_string(),
            locale: "en".to_string(),
        }
    }
}

impl Attendee {
    /// Composed display name, `"first last"` trimmed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// The chosen appointment slot, unset until the appointment stage completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSelection {
    pub event_type_id: u32,
    pub start: Option<DateTime<Utc>>,
}

impl Default for ScheduleSelection {
    fn default() -> Self {
        Self {
            event_type_id: TINT_EVENT_TYPE_ID,
            start: None,
        }
    }
}

/// Vehicle identity and classification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub year: Option<u16>,
    pub make: String,
    pub model: String,
    pub color: String,
    pub class: Option<VehicleClass>,
    pub subtype: Option<VehicleSubtype>,
    /// None = not yet answered (trucks/SUVs get asked; vans are always
    /// factory tinted; standard cabs never are)
    pub factory_tint: Option<bool>,
}

impl VehicleProfile {
    /// Factory tint confirmed present. An unanswered prompt counts as no.
    pub fn has_factory_tint(&self) -> bool {
        self.factory_tint == Some(true)
    }
}

/// Film grade choices for the job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilmSelection {
    pub tier: Option<FilmTier>,
    /// Distinct grade for the windshield, when it differs from the primary
    pub windshield_tier: Option<FilmTier>,
    pub tint_level: Option<TintLevel>,
    pub previous_tint_removal: bool,
}

/// How to reach the customer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactPreferences {
    /// Canonical `+1XXXXXXXXXX`; None until ten digits have been entered
    pub phone: Option<String>,
    pub channel: ContactChannel,
    pub referral_source: Option<String>,
    pub marketing_opt_in: bool,
    pub notes: String,
}

/// The session-scoped booking aggregate.
///
/// Fields are private: reads go through accessors and every mutation goes
/// through a method that finishes with a derivation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    attendee: Attendee,
    schedule: ScheduleSelection,
    vehicle: VehicleProfile,
    coverage: Vec<CoverageTag>,
    film: FilmSelection,
    contact: ContactPreferences,
    /// Always the output of the last derivation pass; skipped on disk so a
    /// loaded document cannot carry stale or tampered values
    #[serde(skip)]
    derived: Derived,
}

impl Default for BookingConfig {
    fn default() -> Self {
        let mut config = Self {
            attendee: Attendee::default(),
            schedule: ScheduleSelection::default(),
            vehicle: VehicleProfile::default(),
            coverage: Vec::new(),
            film: FilmSelection::default(),
            contact: ContactPreferences::default(),
            derived: Derived::default(),
        };
        config.rederive();
        config
    }
}

impl BookingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn attendee(&self) -> &Attendee {
        &self.attendee
    }

    pub fn schedule(&self) -> &ScheduleSelection {
        &self.schedule
    }

    pub fn vehicle(&self) -> &VehicleProfile {
        &self.vehicle
    }

    pub fn coverage(&self) -> &[CoverageTag] {
        &self.coverage
    }

    pub fn film(&self) -> &FilmSelection {
        &self.film
    }

    pub fn contact(&self) -> &ContactPreferences {
        &self.contact
    }

    /// Derived outputs for the current snapshot.
    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    /// Tags currently offered as selectable for this vehicle.
    pub fn offered_coverage(&self) -> Vec<CoverageTag> {
        coverage::offered_tags(self.vehicle.subtype, self.vehicle.factory_tint)
    }

    /// Estimated service duration in minutes, used as the slot-fetch hint.
    pub fn estimated_duration_min(&self) -> u32 {
        derive::service_duration_min(&self.coverage)
    }

    /// Whether the factory-tint question still needs an answer before the
    /// coverage options can be finalized.
    pub fn needs_factory_tint_prompt(&self) -> bool {
        matches!(
            self.vehicle.class,
            Some(VehicleClass::Truck) | Some(VehicleClass::Suv)
        ) && self.vehicle.factory_tint.is_none()
            && self.vehicle.subtype != Some(VehicleSubtype::StandardCab)
    }

    // ------------------------------------------------------------------
    // Vehicle mutations
    // ------------------------------------------------------------------

    /// Select the vehicle class.
    ///
    /// Changing class invalidates the subtype, the vehicle detail fields,
    /// the factory-tint answer, and the coverage set: everything priced or
    /// offered per-vehicle must be re-entered.
    pub fn set_vehicle_class(&mut self, class: VehicleClass) {
        info!(%class, "vehicle class selected");
        self.vehicle.class = Some(class);
        self.vehicle.subtype = class.implicit_subtype();
        self.vehicle.year = None;
        self.vehicle.make.clear();
        self.vehicle.model.clear();
        self.vehicle.color.clear();
        self.vehicle.factory_tint = match class {
            // Vans always ship with factory-tinted rear glass
            VehicleClass::Van => Some(true),
            _ => None,
        };
        self.coverage.clear();
        self.rederive();
    }

    pub fn set_vehicle_subtype(&mut self, subtype: VehicleSubtype) {
        self.vehicle.subtype = Some(subtype);
        if subtype == VehicleSubtype::StandardCab {
            // No rear doors with factory tint to match
            self.vehicle.factory_tint = Some(false);
        }
        coverage::retain_offered(
            &mut self.coverage,
            self.vehicle.subtype,
            self.vehicle.factory_tint,
        );
        self.rederive();
    }

    /// Record the factory-tint answer and reconcile the coverage set.
    pub fn set_factory_tint(&mut self, has_factory_tint: bool) {
        self.vehicle.factory_tint = Some(has_factory_tint);
        coverage::retain_offered(
            &mut self.coverage,
            self.vehicle.subtype,
            self.vehicle.factory_tint,
        );
        // First answer pre-selects the most common package
        if self.coverage.is_empty()
            && coverage::is_offered(
                CoverageTag::SidesRear,
                self.vehicle.subtype,
                self.vehicle.factory_tint,
            )
        {
            self.coverage.push(CoverageTag::SidesRear);
        }
        self.rederive();
    }

    pub fn set_vehicle_year(&mut self, year: Option<u16>) {
        self.vehicle.year = year;
        self.rederive();
    }

    pub fn set_vehicle_make(&mut self, make: &str) {
        self.vehicle.make = make.trim().to_string();
        self.rederive();
    }

    pub fn set_vehicle_model(&mut self, model: &str) {
        self.vehicle.model = model.trim().to_string();
        self.rederive();
    }

    pub fn set_vehicle_color(&mut self, color: &str) {
        self.vehicle.color = color.trim().to_string();
        self.rederive();
    }

    // ------------------------------------------------------------------
    // Coverage mutations
    // ------------------------------------------------------------------

    /// Toggle a coverage tag, resolving exclusivity.
    ///
    /// Toggling a tag the vehicle is not offered is a no-op. Returns
    /// whether the tag is selected afterwards.
    pub fn toggle_coverage(&mut self, tag: CoverageTag) -> bool {
        if !coverage::is_offered(tag, self.vehicle.subtype, self.vehicle.factory_tint) {
            debug!(%tag, "ignoring toggle of unoffered coverage tag");
            return self.coverage.contains(&tag);
        }
        let selected = coverage::toggle(
            &mut self.coverage,
            tag,
            self.vehicle.has_factory_tint(),
        );
        self.rederive();
        selected
    }

    /// Empty the coverage set; the estimate re-derives to zero.
    pub fn clear_coverage(&mut self) {
        self.coverage.clear();
        self.rederive();
    }

    // ------------------------------------------------------------------
    // Film mutations
    // ------------------------------------------------------------------

    pub fn set_film_tier(&mut self, tier: FilmTier) {
        self.film.tier = Some(tier);
        self.rederive();
    }

    pub fn set_windshield_tier(&mut self, tier: Option<FilmTier>) {
        self.film.windshield_tier = tier;
        self.rederive();
    }

    pub fn set_tint_level(&mut self, level: Option<TintLevel>) {
        self.film.tint_level = level;
        self.rederive();
    }

    pub fn set_previous_tint_removal(&mut self, removal: bool) {
        self.film.previous_tint_removal = removal;
        self.rederive();
    }

    // ------------------------------------------------------------------
    // Attendee & contact mutations (details stage)
    // ------------------------------------------------------------------

    pub fn set_attendee_name(&mut self, first: &str, last: &str) {
        self.attendee.first_name = first.trim().to_string();
        self.attendee.last_name = last.trim().to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.attendee.email = email.trim().to_string();
    }

    pub fn set_time_zone(&mut self, zone: &str) {
        self.attendee.time_zone = zone.to_string();
    }

    pub fn set_locale(&mut self, locale: &str) {
        self.attendee.locale = locale.to_string();
    }

    /// Accept raw phone input; the canonical form lands only once ten
    /// digits are present, partial input leaves the field unset.
    pub fn set_phone(&mut self, raw: &str) {
        self.contact.phone = input::normalize_phone(raw);
    }

    pub fn set_contact_channel(&mut self, channel: ContactChannel) {
        self.contact.channel = channel;
    }

    pub fn set_referral_source(&mut self, source: Option<String>) {
        self.contact.referral_source = source;
    }

    pub fn set_marketing_opt_in(&mut self, opt_in: bool) {
        self.contact.marketing_opt_in = opt_in;
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.contact.notes = notes.to_string();
    }

    // ------------------------------------------------------------------
    // Schedule mutations (appointment stage)
    // ------------------------------------------------------------------

    pub fn choose_start(&mut self, start: DateTime<Utc>) {
        info!(%start, "appointment start chosen");
        self.schedule.start = Some(start);
    }

    pub fn clear_start(&mut self) {
        self.schedule.start = None;
    }

    // ------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------

    /// Re-run the derivation engine against the current snapshot.
    ///
    /// Idempotent; called internally after every relevant mutation and
    /// once after deserializing a document.
    pub fn rederive(&mut self) {
        self.derived = derive::recompute(&self.vehicle, &self.coverage, &self.film);
    }
}
