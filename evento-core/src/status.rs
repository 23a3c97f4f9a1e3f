//! Derived temporal status of an event.

use std::fmt;

/// Minutes back from `now` an event still counts as in progress.
pub const IN_PROGRESS_TRAILING_MINUTES: i64 = 120;

/// Minutes ahead of `now` an event already counts as in progress.
pub const IN_PROGRESS_LEADING_MINUTES: i64 = 1;

/// Status of an event relative to the current instant. Always recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Scheduled,
    InProgress,
    Finished,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "Scheduled",
            EventStatus::InProgress => "In progress",
            EventStatus::Finished => "Finished",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
