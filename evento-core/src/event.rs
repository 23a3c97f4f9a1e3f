//! The event record.
//!
//! An [`Event`] holds its attributes and the emails of the people who joined it.
//! Its [`EventStatus`] is never stored: it is derived from `scheduled_at` and
//! the instant passed in by the caller, so a loaded event is never stale.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::category::Category;
use crate::status::{EventStatus, IN_PROGRESS_LEADING_MINUTES, IN_PROGRESS_TRAILING_MINUTES};

/// A scheduled happening with a location, category, description and participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: String,
    address: String,
    category: Category,
    description: String,
    /// Local wall-clock time, minute precision.
    scheduled_at: NaiveDateTime,
    /// Participant emails in join order, without duplicates.
    participants: Vec<String>,
}

impl Event {
    /// Create an event with no participants.
    ///
    /// No validation happens here; callers check field lengths and dates
    /// before constructing. Seconds are dropped from `scheduled_at`.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        category: Category,
        scheduled_at: NaiveDateTime,
        description: impl Into<String>,
    ) -> Self {
        Event {
            name: name.into(),
            address: address.into(),
            category,
            description: description.into(),
            scheduled_at: truncate_to_minute(scheduled_at),
            participants: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_at
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn is_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Add a participant unless already present. Returns true if added.
    pub fn add_participant(&mut self, email: &str) -> bool {
        if self.is_participant(email) {
            return false;
        }
        self.participants.push(email.to_string());
        true
    }

    /// Remove a participant if present. Returns true if removed.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }

    /// True when `scheduled_at` falls after `now - 2h` and before `now + 1m`.
    pub fn is_in_progress(&self, now: NaiveDateTime) -> bool {
        let window_start = now - Duration::minutes(IN_PROGRESS_TRAILING_MINUTES);
        let window_end = now + Duration::minutes(IN_PROGRESS_LEADING_MINUTES);
        self.scheduled_at > window_start && self.scheduled_at < window_end
    }

    /// True when the event was scheduled strictly before `now`.
    pub fn has_occurred(&self, now: NaiveDateTime) -> bool {
        self.scheduled_at < now
    }

    /// Finished takes precedence over in progress, so an event scheduled
    /// exactly at `now` is in progress.
    pub fn status(&self, now: NaiveDateTime) -> EventStatus {
        if self.has_occurred(now) {
            EventStatus::Finished
        } else if self.is_in_progress(now) {
            EventStatus::InProgress
        } else {
            EventStatus::Scheduled
        }
    }
}

fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(dt)
}
