use thiserror::Error;

use crate::starmap::SystemId;

/// Convenient result alias for the starnav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a system name could not be found in the starmap.
    #[error("unknown system name: {name}{}", format_suggestions(.suggestions))]
    UnknownSystem {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a system identifier does not resolve to any system.
    #[error("unknown system id: {id}")]
    UnknownSystemId { id: SystemId },

    /// Raised when the search frontier was exhausted without reaching the goal.
    /// This is an expected outcome for constrained queries, not a fault.
    #[error("no route found between {start} and {goal}")]
    NoRoute { start: SystemId, goal: SystemId },

    /// Raised when a ship class name does not match the closed class enumeration.
    #[error("unknown ship class: {name}")]
    InvalidShipClass { name: String },

    /// Raised when a class-specific skill level is required but was not supplied.
    #[error("missing required skill level: {skill}")]
    MissingSkill { skill: &'static str },

    /// Raised when the input dataset is malformed. Fatal to the load call only.
    #[error("malformed starmap dataset: {message}")]
    Dataset { message: String },

    /// Wrapper for SQLite errors raised while reading a static-data export.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Wrapper for JSON errors raised while decoding or encoding a dataset.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
