//! Field checks applied before an event or profile is built.
//!
//! The core types accept whatever they are given; these are the rules the
//! console enforces on user input. Lengths count characters, not bytes.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use evento_core::Category;
use evento_core::codec::{check_field, parse_datetime};
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[^\s,;]+$").unwrap());

fn min_chars(value: &str, min: usize, message: &str) -> Result<(), String> {
    if value.chars().count() < min {
        return Err(message.to_string());
    }
    Ok(())
}

/// `;` and line breaks would corrupt the event file.
fn storable(label: &str, value: &str) -> Result<(), String> {
    check_field(label, value)
        .map_err(|_| format!("{} cannot contain ';' or line breaks.", label))
}

pub fn name(value: &str) -> Result<(), String> {
    min_chars(value, 3, "Name must be at least 3 characters.")?;
    storable("Name", value)
}

pub fn address(value: &str) -> Result<(), String> {
    min_chars(value, 5, "Address must be at least 5 characters.")?;
    storable("Address", value)
}

pub fn description(value: &str) -> Result<(), String> {
    min_chars(value, 10, "Description must be at least 10 characters.")?;
    storable("Description", value)
}

pub fn city(value: &str) -> Result<(), String> {
    min_chars(value, 2, "City name is too short.")?;
    storable("City", value)
}

/// One address only: the domain part may not hold separators or spaces.
pub fn email(value: &str) -> Result<(), String> {
    if !EMAIL_RE.is_match(value) {
        return Err("Invalid email.".to_string());
    }
    Ok(())
}

pub fn category(value: &str) -> Result<Category, String> {
    value.trim().parse::<Category>().map_err(|e| e.to_string())
}

/// Parse `dd/MM/yyyy HH:mm` and reject anything before `now`.
pub fn future_datetime(value: &str, now: NaiveDateTime) -> Result<NaiveDateTime, String> {
    let dt = parse_datetime(value.trim())
        .map_err(|_| "Invalid date format! Use dd/MM/yyyy HH:mm.".to_string())?;
    if dt < now {
        return Err("Events cannot be scheduled in the past!".to_string());
    }
    Ok(dt)
}
