use std::path::PathBuf;

use thiserror::Error;

/// Every way reading the statistics table can fail. Callers treat all variants
/// the same ("data access failed"); the split only sharpens the log line.
#[derive(Error, Debug)]
pub enum DataAccessError {
    #[error("could not open database {path}")]
    Connect {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query failed")]
    Query(#[from] rusqlite::Error),

    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {field} identifier: {value:?}")]
    InvalidIdentifier { field: &'static str, value: String },
}
