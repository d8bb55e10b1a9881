//! Slot availability boundary
//!
//! Fetching appointment slots for a chosen date is the only asynchronous
//! operation in the wizard. The model here is one outstanding request per
//! date-selection event: every `begin_fetch` bumps a generation counter,
//! and completions carrying a stale generation are ignored, so selecting a
//! new date always supersedes any prior pending response.
//!
//! The fetch policy is bounded: one timeout per attempt, one automatic
//! retry, then a recoverable empty state that lets the customer pick a
//! different date. A failed fetch never propagates a raw failure into the
//! wizard.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{Result, TintBookError};

/// One bookable slot returned by the availability source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub slot_id: String,
    pub start_time: DateTime<Utc>,
    pub available: bool,
}

/// Bounded timeout/retry policy for a slot fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Budget per attempt before the attempt counts as failed
    pub timeout: Duration,
    /// Automatic retries after the first failed attempt
    pub max_retries: u32,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_retries: 1,
        }
    }
}

/// Source of appointment slots for a given date.
///
/// The returned sequence is finite, ordered by start time, and not
/// restartable; callers re-fetch rather than rewind. `duration_hint_min`
/// carries the estimated service duration so the backend can size gaps.
pub trait SlotSource {
    fn list_available_slots(&self, date: NaiveDate, duration_hint_min: u32) -> Result<Vec<Slot>>;
}

/// Deterministic stand-in for the real scheduling backend.
///
/// Serves the same shop-hours pattern every day: six slots from 9:00 with
/// 10:00 and 15:00 already taken.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubSlotSource;

impl SlotSource for StubSlotSource {
    fn list_available_slots(&self, date: NaiveDate, _duration_hint_min: u32) -> Result<Vec<Slot>> {
        const HOURS: [(u32, bool); 6] = [
            (9, true),
            (10, false),
            (11, true),
            (13, true),
            (14, true),
            (15, false),
        ];

        let slots = HOURS
            .iter()
            .map(|&(hour, available)| {
                let start = date.and_hms_opt(hour, 0, 0).ok_or_else(|| {
                    TintBookError::slots(format!("invalid slot hour {hour} on {date}"))
                })?;
                Ok(Slot {
                    slot_id: format!("{date}T{hour:02}:00"),
                    start_time: Utc.from_utc_datetime(&start),
                    available,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(slots)
    }
}

/// Token tying a completion back to the fetch that requested it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    date: NaiveDate,
    generation: u64,
}

impl FetchTicket {
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Availability state surfaced to the appointment step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Availability {
    /// No date selected yet
    #[default]
    Idle,
    /// A fetch is outstanding for this date
    Pending { date: NaiveDate },
    /// Slots arrived for this date
    Ready { date: NaiveDate, slots: Vec<Slot> },
    /// The fetch budget is spent; the customer may reselect a date
    Unavailable { date: NaiveDate },
}

/// What became of a reported completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The completion was for the current generation and was applied
    Applied,
    /// The attempt failed but retry budget remains; issue the request again
    Retry,
    /// The fetch budget is spent; state moved to `Unavailable`
    Exhausted,
    /// The completion belonged to a superseded request and was ignored
    Stale,
}

/// Tracks the outstanding slot request and applies supersession rules.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityTracker {
    generation: u64,
    retries_used: u32,
    policy: FetchPolicy,
    state: Availability,
}

impl AvailabilityTracker {
    pub fn new(policy: FetchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &Availability {
        &self.state
    }

    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    /// Slots for the ready date, empty in every other state.
    pub fn slots(&self) -> &[Slot] {
        match &self.state {
            Availability::Ready { slots, .. } => slots,
            _ => &[],
        }
    }

    /// Start a fetch for a newly selected date, superseding any prior
    /// outstanding request.
    pub fn begin_fetch(&mut self, date: NaiveDate) -> FetchTicket {
        self.generation += 1;
        self.retries_used = 0;
        self.state = Availability::Pending { date };
        debug!(%date, generation = self.generation, "slot fetch started");
        FetchTicket {
            date,
            generation: self.generation,
        }
    }

    /// Report the result of a fetch attempt.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<Slot>>) -> FetchOutcome {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "ignoring superseded slot response"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(slots) => {
                info!(date = %ticket.date, count = slots.len(), "slots ready");
                self.state = Availability::Ready {
                    date: ticket.date,
                    slots,
                };
                FetchOutcome::Applied
            }
            Err(err) => self.register_failure(ticket, &err),
        }
    }

    /// Report that an attempt exceeded the policy timeout.
    pub fn note_timeout(&mut self, ticket: FetchTicket) -> FetchOutcome {
        if ticket.generation != self.generation {
            return FetchOutcome::Stale;
        }
        let err = TintBookError::slots(format!(
            "fetch for {} exceeded {:?}",
            ticket.date, self.policy.timeout
        ));
        self.register_failure(ticket, &err)
    }

    fn register_failure(&mut self, ticket: FetchTicket, err: &TintBookError) -> FetchOutcome {
        if self.retries_used < self.policy.max_retries {
            self.retries_used += 1;
            warn!(date = %ticket.date, %err, retry = self.retries_used, "slot fetch failed; retrying");
            FetchOutcome::Retry
        } else {
            warn!(date = %ticket.date, %err, "slot fetch budget spent");
            self.state = Availability::Unavailable { date: ticket.date };
            FetchOutcome::Exhausted
        }
    }

    /// Synchronous driver: run a fetch against a source, honoring the
    /// retry budget. The collaborator owns real timeouts; here an `Err`
    /// from the source counts as a failed attempt.
    pub fn fetch(
        &mut self,
        source: &dyn SlotSource,
        date: NaiveDate,
        duration_hint_min: u32,
    ) -> &Availability {
        let ticket = self.begin_fetch(date);
        loop {
            let result = source.list_available_slots(date, duration_hint_min);
            match self.complete(ticket, result) {
                FetchOutcome::Retry => continue,
                _ => break,
            }
        }
        &self.state
    }
}
