pub mod config;
pub mod list;
pub mod new;
pub mod session;

use chrono::NaiveDateTime;

/// Current local wall-clock time. Event times carry no timezone.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
