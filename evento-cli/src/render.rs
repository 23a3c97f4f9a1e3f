//! TUI rendering for evento-core types.
//!
//! Extension traits that add colored terminal output using owo_colors.

use chrono::NaiveDateTime;
use evento_core::codec::format_datetime;
use evento_core::{Event, EventStatus};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventStatus {
    fn render(&self) -> String {
        match self {
            EventStatus::Scheduled => self.label().green().to_string(),
            EventStatus::InProgress => self.label().yellow().to_string(),
            EventStatus::Finished => self.label().dimmed().to_string(),
        }
    }
}

/// Full detail block for one event, status evaluated at `now`.
pub fn event_details(event: &Event, now: NaiveDateTime) -> String {
    let lines = [
        format!("{} {}", "Name:".dimmed(), event.name().bold()),
        format!("{} {}", "Category:".dimmed(), event.category()),
        format!("{} {}", "Address:".dimmed(), event.address()),
        format!("{} {}", "Date/Time:".dimmed(), format_datetime(&event.scheduled_at())),
        format!("{} {}", "Description:".dimmed(), event.description()),
        format!("{} {}", "Status:".dimmed(), event.status(now).render()),
        format!("{} {}", "Participants:".dimmed(), event.participants().len()),
    ];
    lines.join("\n")
}

/// One-line summary used in selection prompts.
pub fn event_summary(event: &Event, now: NaiveDateTime) -> String {
    format!(
        "{}  {} [{}] ({})",
        format_datetime(&event.scheduled_at()),
        event.name(),
        event.category(),
        event.status(now).label()
    )
}

/// Print a titled list of events, or `empty` if there are none.
pub fn print_events(title: &str, events: &[(usize, &Event)], now: NaiveDateTime, empty: &str) {
    println!();
    println!("{}", format!("=== {} ===", title).bold());

    if events.is_empty() {
        println!("{}", empty.dimmed());
        return;
    }

    for (index, event) in events {
        println!();
        println!("{}", format!("Event #{}", index).cyan());
        println!("{}", event_details(event, now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use evento_core::Category;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn summary_shows_time_name_category_and_status() {
        let event = Event::new("Meetup", "Hall 2", Category::Workshop, at(10, 0), "Learn the thing");
        assert_eq!(
            event_summary(&event, at(9, 0)),
            "01/01/2030 10:00  Meetup [WORKSHOP] (Scheduled)"
        );
        assert_eq!(
            event_summary(&event, at(11, 0)),
            "01/01/2030 10:00  Meetup [WORKSHOP] (Finished)"
        );
    }

    #[test]
    fn details_include_every_field() {
        let mut event = Event::new("Meetup", "Hall 2", Category::Workshop, at(10, 0), "Learn the thing");
        event.add_participant("a@b.com");
        let details = event_details(&event, at(10, 0));
        for expected in ["Meetup", "WORKSHOP", "Hall 2", "01/01/2030 10:00", "Learn the thing", "In progress"] {
            assert!(details.contains(expected), "missing {expected}");
        }
    }
}
