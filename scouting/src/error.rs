use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the edges of the simulation: loading rosters and
/// configuration, and writing reports. The simulation itself cannot fail.
#[derive(Debug, Error)]
pub enum ScoutingError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("roster line {line}: unknown role {role:?} (expected Attack or Defense)")]
    InvalidRole { line: u64, role: String },

    #[error("roster line {line}: invalid price {value:?} (expected a non-negative number)")]
    InvalidPrice { line: u64, value: String },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("number of matches must be positive")]
    ZeroMatches,

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoutingError>;
