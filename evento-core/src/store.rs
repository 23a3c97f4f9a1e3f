//! Whole-file load and save of the event list.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::EventoResult;
use crate::event::Event;

/// Line-oriented text file holding one encoded event per line.
///
/// Every save rewrites the whole file. There is no atomic replace: a failed
/// save can leave a partially written file behind.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every event from the file, in file order.
    ///
    /// A missing or unreadable file yields an empty list. Bytes that are not
    /// valid UTF-8 are replaced rather than failing the load. Blank lines are
    /// skipped. The first malformed line aborts the load with a format error
    /// naming its line number, so a later save never silently drops data.
    pub fn load(&self) -> EventoResult<Vec<Event>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No event file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Could not read event file, starting empty"
                );
                return Ok(Vec::new());
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            warn!(
                path = %self.path.display(),
                "Event file is not valid UTF-8, replaced undecodable bytes"
            );
        }

        let mut events = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let event = Event::from_line(line).map_err(|e| e.at_line(idx + 1))?;
            events.push(event);
        }

        debug!(path = %self.path.display(), count = events.len(), "Loaded events");
        Ok(events)
    }

    /// Overwrite the file with one line per event.
    ///
    /// Fails with [`crate::EventoError::InvalidArgument`] before touching the file if
    /// any event holds a value that would not read back.
    pub fn save(&self, events: &[Event]) -> EventoResult<()> {
        for event in events {
            event.check_storable()?;
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        for event in events {
            writeln!(writer, "{}", event.to_line())?;
        }
        writer.flush()?;

        debug!(path = %self.path.display(), count = events.len(), "Saved events");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::error::EventoError;
    use chrono::NaiveDate;

    fn make_event(name: &str) -> Event {
        let at = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        Event::new(name, "Park St 1", Category::Show, at, "A great show tonight")
    }

    #[test]
    fn save_writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::new(dir.path().join("events.data"));

        store.save(&[make_event("One"), make_event("Two")]).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.ends_with('\n'));
        assert!(content.starts_with("One;"));
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::new(dir.path().join("events.data"));

        store.save(&[make_event("One"), make_event("Two")]).unwrap();
        store.save(&[make_event("Three")]).unwrap();

        let events = store.load().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "Three");
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::new(dir.path().join("nested").join("events.data"));
        store.save(&[make_event("One")]).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.data");
        let line = make_event("One").to_line();
        std::fs::write(&path, format!("{line}\n\n   \n{line}\n")).unwrap();

        let events = EventStore::new(&path).load().unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn save_refuses_unstorable_event_and_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::new(dir.path().join("events.data"));
        store.save(&[make_event("One")]).unwrap();

        let err = store
            .save(&[make_event("One"), make_event("Rock; Roll")])
            .unwrap_err();
        assert!(matches!(err, EventoError::InvalidArgument(_)));

        let events = store.load().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "One");
    }
}
