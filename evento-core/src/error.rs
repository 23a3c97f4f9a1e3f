//! Error types for evento.

use thiserror::Error;

/// Errors that can occur in evento operations.
#[derive(Error, Debug)]
pub enum EventoError {
    /// A stored line could not be decoded into an event.
    #[error("{}", format_message(.line, .reason))]
    Format { line: Option<usize>, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EventoError {
    pub fn format(reason: impl Into<String>) -> Self {
        EventoError::Format {
            line: None,
            reason: reason.into(),
        }
    }

    /// Attach a 1-based line number to a format error. Other variants pass through.
    pub fn at_line(self, number: usize) -> Self {
        match self {
            EventoError::Format { reason, .. } => EventoError::Format {
                line: Some(number),
                reason,
            },
            other => other,
        }
    }
}

fn format_message(line: &Option<usize>, reason: &str) -> String {
    match line {
        Some(n) => format!("Invalid event data on line {n}: {reason}"),
        None => format!("Invalid event data: {reason}"),
    }
}

/// Result type alias for evento operations.
pub type EventoResult<T> = Result<T, EventoError>;
