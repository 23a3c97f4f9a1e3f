//! Line format for stored events.
//!
//! One event per line, fields separated by `;`:
//!
//! ```text
//! name;address;category;dd/MM/yyyy HH:mm;description;email1,email2
//! ```
//!
//! The participants field is empty when nobody has joined, but the separator
//! before it is always written.

use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::category::Category;
use crate::error::{EventoError, EventoResult};
use crate::event::Event;

pub const FIELD_SEPARATOR: &str = ";";
pub const PARTICIPANT_SEPARATOR: &str = ",";

/// Pattern for `scheduled_at`, e.g. `25/12/2024 18:30`.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

const REQUIRED_FIELDS: usize = 5;

/// Parse a date/time in the storage pattern.
pub fn parse_datetime(s: &str) -> EventoResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATE_FORMAT).map_err(|e| {
        EventoError::format(format!(
            "could not parse date '{}' (expected dd/MM/yyyy HH:mm): {}",
            s, e
        ))
    })
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATE_FORMAT).to_string()
}

/// Reject a text field that would split its line or start a new one.
///
/// Commas are fine outside the participants field.
pub fn check_field(label: &str, value: &str) -> EventoResult<()> {
    match value.chars().find(|c| FIELD_SEPARATOR.contains(*c) || matches!(c, '\r' | '\n')) {
        Some(c) => Err(EventoError::InvalidArgument(format!(
            "{} must not contain {:?}",
            label, c
        ))),
        None => Ok(()),
    }
}

/// Reject a participant email that could not be read back as one token.
pub fn check_participant(email: &str) -> EventoResult<()> {
    if email.is_empty() {
        return Err(EventoError::InvalidArgument(
            "participant email must not be empty".to_string(),
        ));
    }
    check_field("participant email", email)?;
    match email.chars().find(|c| PARTICIPANT_SEPARATOR.contains(*c)) {
        Some(c) => Err(EventoError::InvalidArgument(format!(
            "participant email must not contain {:?}",
            c
        ))),
        None => Ok(()),
    }
}

impl Event {
    /// Check that [`Event::to_line`] would read back as this same event.
    pub fn check_storable(&self) -> EventoResult<()> {
        check_field("name", self.name())?;
        check_field("address", self.address())?;
        check_field("description", self.description())?;
        self.participants()
            .iter()
            .try_for_each(|p| check_participant(p))
    }

    /// Encode as a single line, without a line terminator.
    pub fn to_line(&self) -> String {
        [
            self.name().to_string(),
            self.address().to_string(),
            self.category().to_string(),
            format_datetime(&self.scheduled_at()),
            self.description().to_string(),
            self.participants().join(PARTICIPANT_SEPARATOR),
        ]
        .join(FIELD_SEPARATOR)
    }

    /// Decode a line produced by [`Event::to_line`].
    ///
    /// Fails with [`EventoError::Format`] when fewer than five fields are
    /// present, the date does not match [`DATE_FORMAT`], or the category is
    /// not one of the known ones. A missing or empty sixth field means no
    /// participants; fields past the sixth are ignored.
    pub fn from_line(line: &str) -> EventoResult<Event> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

        if parts.len() < REQUIRED_FIELDS {
            return Err(EventoError::format(format!(
                "expected at least {} fields separated by '{}', found {}",
                REQUIRED_FIELDS,
                FIELD_SEPARATOR,
                parts.len()
            )));
        }

        let category = Category::from_str(parts[2])
            .map_err(|e| EventoError::format(e.to_string()))?;
        let scheduled_at = parse_datetime(parts[3])?;

        let mut event = Event::new(parts[0], parts[1], category, scheduled_at, parts[4]);

        if let Some(participants) = parts.get(5) {
            participants
                .split(PARTICIPANT_SEPARATOR)
                .filter(|p| !p.is_empty())
                .for_each(|p| {
                    event.add_participant(p);
                });
        }

        Ok(event)
    }
}

impl FromStr for Event {
    type Err = EventoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::from_line(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn make_meetup() -> Event {
        let mut event = Event::new(
            "Meetup",
            "Hall 2",
            Category::Workshop,
            at(2030, 2, 1, 10, 0),
            "Learn the thing",
        );
        event.add_participant("a@b.com");
        event
    }

    // --- encoding ---

    #[test]
    fn to_line_without_participants_keeps_trailing_separator() {
        let event = Event::new(
            "Concert",
            "Park St 1",
            Category::Show,
            at(2030, 1, 1, 20, 0),
            "A great show tonight",
        );
        assert_eq!(
            event.to_line(),
            "Concert;Park St 1;SHOW;01/01/2030 20:00;A great show tonight;"
        );
    }

    #[test]
    fn to_line_joins_participants() {
        let mut event = make_meetup();
        event.add_participant("c@d.com");
        assert_eq!(
            event.to_line(),
            "Meetup;Hall 2;WORKSHOP;01/02/2030 10:00;Learn the thing;a@b.com,c@d.com"
        );
    }

    #[test]
    fn date_is_zero_padded() {
        assert_eq!(format_datetime(&at(2024, 3, 5, 7, 9)), "05/03/2024 07:09");
    }

    // --- decoding ---

    #[test]
    fn from_line_reads_every_field() {
        let event =
            Event::from_line("Meetup;Hall 2;WORKSHOP;01/02/2030 10:00;Learn the thing;a@b.com")
                .unwrap();
        assert_eq!(event, make_meetup());
    }

    #[test]
    fn from_line_round_trips() {
        let mut event = make_meetup();
        event.add_participant("z@y.com");
        event.add_participant("b@c.com");
        let decoded: Event = event.to_line().parse().unwrap();
        assert_eq!(decoded, event);
        assert_eq!(decoded.participants(), ["a@b.com", "z@y.com", "b@c.com"]);
    }

    #[test]
    fn from_line_tolerates_missing_participants_field() {
        let event = Event::from_line("Concert;Park St 1;SHOW;01/01/2030 20:00;A great show").unwrap();
        assert!(event.participants().is_empty());
    }

    #[test]
    fn from_line_tolerates_empty_participants_field() {
        let event =
            Event::from_line("Concert;Park St 1;SHOW;01/01/2030 20:00;A great show;").unwrap();
        assert!(event.participants().is_empty());
    }

    #[test]
    fn from_line_drops_duplicate_participants() {
        let event = Event::from_line(
            "Concert;Park St 1;SHOW;01/01/2030 20:00;A great show;a@b.com,c@d.com,a@b.com",
        )
        .unwrap();
        assert_eq!(event.participants(), ["a@b.com", "c@d.com"]);
    }

    #[test]
    fn from_line_skips_empty_participant_tokens() {
        let event =
            Event::from_line("Concert;Park St 1;SHOW;01/01/2030 20:00;A great show;a@b.com,,c@d.com")
                .unwrap();
        assert_eq!(event.participants(), ["a@b.com", "c@d.com"]);
    }

    #[test]
    fn from_line_normalizes_category() {
        let event = Event::from_line("Festa;Rua A 10;festa;01/01/2030 20:00;Uma festa boa;").unwrap();
        assert_eq!(event.category(), Category::Party);
        assert!(event.to_line().contains(";PARTY;"));
    }

    #[test]
    fn from_line_strips_carriage_return() {
        let event =
            Event::from_line("Concert;Park St 1;SHOW;01/01/2030 20:00;A great show;a@b.com\r")
                .unwrap();
        assert_eq!(event.participants(), ["a@b.com"]);
    }

    #[test]
    fn from_line_rejects_single_field() {
        let err = Event::from_line("OnlyOneField").unwrap_err();
        assert!(matches!(err, EventoError::Format { line: None, .. }));
    }

    #[test]
    fn from_line_rejects_four_fields() {
        assert!(Event::from_line("a;b;SHOW;01/01/2030 20:00").is_err());
    }

    #[test]
    fn from_line_rejects_bad_date() {
        let err = Event::from_line("Concert;Park St 1;SHOW;2030-01-01 20:00;A great show;")
            .unwrap_err();
        assert!(matches!(err, EventoError::Format { .. }));
        assert!(err.to_string().contains("2030-01-01 20:00"));
    }

    #[test]
    fn from_line_rejects_unknown_category() {
        let err = Event::from_line("Concert;Park St 1;CONCERT;01/01/2030 20:00;A great show;")
            .unwrap_err();
        assert!(matches!(err, EventoError::Format { .. }));
    }

    #[test]
    fn from_line_rejects_padded_category() {
        let err = Event::from_line("Concert;Park St 1; SHOW ;01/01/2030 20:00;A great show;")
            .unwrap_err();
        assert!(matches!(err, EventoError::Format { .. }));
    }

    // --- storability ---

    #[test]
    fn commas_in_text_fields_round_trip() {
        let event = Event::new(
            "Rock, Pop and Jazz",
            "Rua A, 10",
            Category::Show,
            at(2030, 1, 1, 20, 0),
            "Bring food, drinks, friends",
        );
        event.check_storable().unwrap();
        let decoded = Event::from_line(&event.to_line()).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn field_separator_is_not_storable() {
        let event = Event::new(
            "Rock; Roll",
            "Park St 1",
            Category::Show,
            at(2030, 1, 1, 20, 0),
            "A great show tonight",
        );
        let err = event.check_storable().unwrap_err();
        assert!(matches!(err, EventoError::InvalidArgument(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn line_breaks_are_not_storable() {
        assert!(check_field("description", "two\nlines").is_err());
        assert!(check_field("description", "two\rlines").is_err());
        assert!(check_field("description", "one line, with commas").is_ok());
    }

    #[test]
    fn participant_tokens_must_be_single() {
        assert!(check_participant("a@b.com").is_ok());
        assert!(check_participant("a@b.com,c@d.com").is_err());
        assert!(check_participant("a@b;c").is_err());
        assert!(check_participant("a@b\nc").is_err());
        assert!(check_participant("").is_err());

        let mut event = make_meetup();
        event.add_participant("x@y.com,z@w.com");
        assert!(event.check_storable().is_err());
    }
}
