use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use evento_core::{Event, EventStore};
use owo_colors::OwoColorize;
use tracing::info;

use crate::validate;

/// Raw command-line fields for a new event.
pub struct NewEvent {
    pub name: String,
    pub address: String,
    pub category: String,
    pub at: String,
    pub description: String,
}

pub fn run(store: &EventStore, fields: NewEvent, now: NaiveDateTime) -> Result<()> {
    let event = build_event(fields, now)?;

    let mut events = store
        .load()
        .with_context(|| format!("Failed to load events from {}", store.path().display()))?;
    events.push(event);
    store
        .save(&events)
        .with_context(|| format!("Failed to save events to {}", store.path().display()))?;

    info!(path = %store.path().display(), count = events.len(), "Event added");
    println!("{}", "Event registered successfully!".green());

    Ok(())
}

/// Apply the same checks as the interactive form.
pub fn build_event(fields: NewEvent, now: NaiveDateTime) -> Result<Event> {
    let name = fields.name.trim();
    let address = fields.address.trim();
    let description = fields.description.trim();

    validate::name(name).map_err(anyhow::Error::msg)?;
    validate::address(address).map_err(anyhow::Error::msg)?;
    let category = validate::category(&fields.category).map_err(anyhow::Error::msg)?;
    let scheduled_at = validate::future_datetime(&fields.at, now).map_err(anyhow::Error::msg)?;
    validate::description(description).map_err(anyhow::Error::msg)?;

    Ok(Event::new(name, address, category, scheduled_at, description))
}
