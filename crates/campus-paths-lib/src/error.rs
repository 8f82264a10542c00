use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campus paths library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset file could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the campus dataset")]
    ProjectDirsUnavailable,

    /// Raised when a dataset row cannot be parsed or fails validation.
    #[error("invalid record in {file} at line {line}: {message}")]
    DatasetParse {
        file: String,
        line: u64,
        message: String,
    },

    /// Raised when two building records share a short name.
    #[error("duplicate building short name: {name}")]
    DuplicateBuilding { name: String },

    /// Raised when two buildings resolve to the same coordinate.
    #[error("buildings {first} and {second} share the same location")]
    SharedBuildingLocation { first: String, second: String },

    /// Raised when a graph operation references a node that is not in the graph.
    #[error("node {node} does not exist in the graph")]
    UnknownNode { node: String },

    /// Raised when a query names a building that is not on the map.
    #[error("unknown building: {name}{}", format_suggestions(.suggestions))]
    UnknownBuilding {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a query supplies an empty building name.
    #[error("building name cannot be empty")]
    EmptyBuildingName,

    /// Raised when a long-name lookup targets an unregistered short name.
    #[error("no building registered under short name {name}")]
    BuildingNotFound { name: String },

    /// Raised when a path would be extended with a negative or non-finite cost.
    #[error("edge cost must be finite and non-negative, got {cost}")]
    InvalidEdgeCost { cost: f64 },

    /// Raised when a bounded cache is configured without room for any entry.
    #[error("cache capacity must be greater than zero")]
    InvalidCacheCapacity,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors not tied to a specific record.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Whether the error stems from caller-supplied input rather than the
    /// environment. Transport layers map these to client errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::UnknownNode { .. }
                | Error::UnknownBuilding { .. }
                | Error::EmptyBuildingName
                | Error::InvalidEdgeCost { .. }
                | Error::InvalidCacheCapacity
        )
    }
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
