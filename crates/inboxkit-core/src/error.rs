use std::path::PathBuf;

use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Unknown {kind} '{name}'")]
    UnknownControl { kind: &'static str, name: String },
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
    #[error("Record not found: {0}")]
    RecordNotFound(String),
    #[error("Edit of record {id} changed its id to {new_id}")]
    IdChanged { id: String, new_id: String },
    #[error("Invalid question {id}: {reason}")]
    InvalidQuestion { id: String, reason: String },
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
