//! tintbook Library
//!
//! Core engine for configuring and pricing an automotive window-tint job
//! through a guided multi-step wizard: the step-sequencing state machine,
//! the booking aggregate, coverage-selection rules, the pure derivation
//! engine, the price book, per-step gates, and the variant-code generator.
//!
//! Presentation (layout, animation, calendars, vehicle graphics) lives in
//! the embedding host; this crate owns only the business core and two stub
//! boundaries (slot availability, booking confirmation).

pub mod booking;
pub mod cli;
pub mod config_file;
pub mod coverage;
pub mod derive;
pub mod error;
pub mod input;
pub mod pricing;
pub mod schedule;
pub mod session;
pub mod steps;
pub mod types;
pub mod variant;

// Re-export main types for convenience
pub use booking::{
    Attendee, BookingConfig, ContactPreferences, FilmSelection, ScheduleSelection,
    VehicleProfile, TINT_EVENT_TYPE_ID,
};
pub use derive::{recompute, Derived};
pub use error::{Result, TintBookError};
pub use schedule::{
    Availability, AvailabilityTracker, FetchOutcome, FetchPolicy, FetchTicket, Slot, SlotSource,
    StubSlotSource,
};
pub use session::{BookingSession, Confirmation};
pub use steps::{Direction, Step, StepSequencer};
pub use types::{
    ContactChannel, CoverageTag, FilmTier, GlassRegion, ServiceSubtype, TintLevel, VehicleClass,
    VehicleSubtype,
};
