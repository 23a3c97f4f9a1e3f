use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use evento_core::{EventStatus, EventStore, Registry};
use owo_colors::OwoColorize;

use crate::render::print_events;

pub fn run(store: &EventStore, status: Option<EventStatus>, now: NaiveDateTime) -> Result<()> {
    let events = store
        .load()
        .with_context(|| format!("Failed to load events from {}", store.path().display()))?;
    let registry = Registry::new(events);

    let entries: Vec<_> = registry
        .by_schedule()
        .into_iter()
        .filter(|(_, event)| status.is_none_or(|s| event.status(now) == s))
        .collect();

    match status {
        None => print_events("Events", &entries, now, "No events registered."),
        Some(s) => print_events(s.label(), &entries, now, "No matching events."),
    }

    if !entries.is_empty() {
        println!();
        println!("{}", format!("{} of {} events", entries.len(), registry.len()).dimmed());
    }

    Ok(())
}

