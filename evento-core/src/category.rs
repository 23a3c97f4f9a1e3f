//! Event categories.

use std::fmt;
use std::str::FromStr;

use crate::error::EventoError;

/// The closed set of categories an event can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Party,
    Show,
    Sport,
    Conference,
    Workshop,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Party,
        Category::Show,
        Category::Sport,
        Category::Conference,
        Category::Workshop,
        Category::Other,
    ];

    /// Normalized upper-case label, as written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Party => "PARTY",
            Category::Show => "SHOW",
            Category::Sport => "SPORT",
            Category::Conference => "CONFERENCE",
            Category::Workshop => "WORKSHOP",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EventoError;

    /// Case-insensitive. Accepts the localized labels from older data files too.
    /// Surrounding whitespace is not part of any label; trim input first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PARTY" | "FESTA" => Ok(Category::Party),
            "SHOW" => Ok(Category::Show),
            "SPORT" | "ESPORTE" => Ok(Category::Sport),
            "CONFERENCE" | "CONFERÊNCIA" | "CONFERENCIA" => Ok(Category::Conference),
            "WORKSHOP" => Ok(Category::Workshop),
            "OTHER" | "OUTRO" => Ok(Category::Other),
            _ => Err(EventoError::InvalidArgument(format!(
                "Unknown category '{}'. Expected one of: {}",
                s,
                Category::ALL
                    .iter()
                    .map(Category::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}
