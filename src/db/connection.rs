use rusqlite::{Connection, OpenFlags};

use crate::config::Config;
use crate::error::DataAccessError;

/// Open the configured SQLite file for reading. The viewer never writes, so the
/// handle is read-only and a missing file fails here instead of silently
/// creating an empty database.
pub fn open_connection(config: &Config) -> Result<Connection, DataAccessError> {
    log::debug!("opening database {}", config.database.display());

    Connection::open_with_flags(
        &config.database,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|source| DataAccessError::Connect {
        path: config.database.clone(),
        source,
    })
}
