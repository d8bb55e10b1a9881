//! Booking document handling for saving and loading configurations.
//!
//! A booking can be written to and restored from pretty-printed JSON.
//! Derived fields are never stored; loading always re-runs the derivation
//! engine so the document cannot smuggle in stale or hand-edited outputs.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::booking::BookingConfig;
use crate::steps::Step;

impl BookingConfig {
    /// Save the booking to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize booking to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write booking to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a booking from a JSON file and re-derive its outputs.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read booking from {:?}", path.as_ref()))?;

        let mut config: Self =
            serde_json::from_str(&content).context("Failed to parse booking JSON")?;
        config.rederive();

        Ok(config)
    }

    /// Everything still blocking this booking from being confirmable.
    ///
    /// One message per closed gate, in stage order; empty means every
    /// pre-review stage is complete. Gates never error, so neither does
    /// this.
    pub fn validation_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for step in Step::all() {
            if step.is_terminal() || *step == Step::Review || step.gate_passes(self) {
                continue;
            }
            let issue = match step {
                Step::Vehicle => {
                    if self.vehicle().class.is_none() {
                        "vehicle: select a vehicle class"
                    } else {
                        "vehicle: this class needs a cab/body style"
                    }
                }
                Step::Coverage => "coverage: select at least one coverage option",
                Step::Film => "film: choose a film grade",
                Step::Appointment => "appointment: pick a date and time",
                Step::Details => "details: first name, last name, email, and phone are required",
                Step::Review | Step::Success => unreachable!(),
            };
            issues.push(issue.to_string());
        }

        issues
    }
}
