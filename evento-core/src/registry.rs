//! The in-memory event collection for a session.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::codec::check_participant;
use crate::error::{EventoError, EventoResult};
use crate::event::Event;
use crate::status::EventStatus;

/// Ordered collection of events, owned by the session.
///
/// Events are only ever appended; listing in schedule order returns a view
/// and leaves the stored order (and therefore the file order) untouched.
/// Queries return `(index, &Event)` pairs so callers can refer back to an
/// event by its position in the collection.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    events: Vec<Event>,
}

impl Registry {
    pub fn new(events: Vec<Event>) -> Self {
        Registry { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// Append an event and return its index.
    pub fn add(&mut self, event: Event) -> usize {
        self.events.push(event);
        self.events.len() - 1
    }

    /// All events ordered by `scheduled_at`. Ties keep insertion order.
    pub fn by_schedule(&self) -> Vec<(usize, &Event)> {
        let mut entries: Vec<(usize, &Event)> = self.events.iter().enumerate().collect();
        entries.sort_by_key(|(_, event)| event.scheduled_at());
        entries
    }

    /// Events the given email has joined, in collection order.
    pub fn joined_by(&self, email: &str) -> Vec<(usize, &Event)> {
        self.filter(|event| event.is_participant(email))
    }

    /// Events whose raw in-progress window contains `now`.
    pub fn in_progress(&self, now: NaiveDateTime) -> Vec<(usize, &Event)> {
        self.filter(|event| event.is_in_progress(now))
    }

    /// Events scheduled before `now`.
    pub fn finished(&self, now: NaiveDateTime) -> Vec<(usize, &Event)> {
        self.filter(|event| event.has_occurred(now))
    }

    /// Events with the given derived status.
    pub fn with_status(&self, status: EventStatus, now: NaiveDateTime) -> Vec<(usize, &Event)> {
        self.filter(|event| event.status(now) == status)
    }

    /// Add `email` to the event at `index`.
    ///
    /// Finished events cannot be joined, and the email must be a single
    /// participant token. Returns false if already joined.
    pub fn join(&mut self, index: usize, email: &str, now: NaiveDateTime) -> EventoResult<bool> {
        check_participant(email)?;

        let event = self
            .events
            .get_mut(index)
            .ok_or_else(|| invalid_index(index))?;

        if event.has_occurred(now) {
            return Err(EventoError::InvalidArgument(format!(
                "'{}' has already happened",
                event.name()
            )));
        }

        let added = event.add_participant(email);
        debug!(event_name = event.name(), email, added, "Joined event");
        Ok(added)
    }

    /// Remove `email` from the event at `index`. Returns false if it was not joined.
    pub fn leave(&mut self, index: usize, email: &str) -> EventoResult<bool> {
        let event = self
            .events
            .get_mut(index)
            .ok_or_else(|| invalid_index(index))?;

        let removed = event.remove_participant(email);
        debug!(event_name = event.name(), email, removed, "Left event");
        Ok(removed)
    }

    fn filter<F>(&self, predicate: F) -> Vec<(usize, &Event)>
    where
        F: Fn(&Event) -> bool,
    {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, event)| predicate(event))
            .collect()
    }
}

fn invalid_index(index: usize) -> EventoError {
    EventoError::InvalidArgument(format!("No event #{}", index))
}
