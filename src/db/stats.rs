use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};

use crate::config::Config;
use crate::db::open_connection;
use crate::error::{ConfigError, DataAccessError};
use crate::models::ImmigrationRecord;

/// 2^64, the first whole REAL that no longer fits a count.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// The single read query, built from validated identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsQuery {
    sql: String,
}

impl StatsQuery {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sql: format!(
                "SELECT {}, {} FROM {}",
                config.year_column, config.count_column, config.table
            ),
        })
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }
}

impl Default for StatsQuery {
    fn default() -> Self {
        Self {
            sql: "SELECT year, number FROM immigration_stats".to_string(),
        }
    }
}

/// Read every row in storage order. There is deliberately no `ORDER BY`: the
/// chart colors are assigned by position, so the caller sees exactly what the
/// engine returns. Statement and cursor are dropped before returning.
pub fn fetch_all(
    conn: &Connection,
    query: &StatsQuery,
) -> Result<Vec<ImmigrationRecord>, DataAccessError> {
    let mut stmt = conn.prepare(query.sql())?;
    let mut rows = stmt.query([])?;

    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        let index = records.len();
        let year = read_year(row, index)?;
        let count = read_count(row, index)?;
        records.push(ImmigrationRecord::new(year, count));
    }

    Ok(records)
}

/// Open, fetch once, close. Both views are fed from the returned set.
pub fn try_load_records(config: &Config) -> Result<Vec<ImmigrationRecord>> {
    let query = StatsQuery::from_config(config).context("invalid query configuration")?;
    let conn = open_connection(config)?;
    let records = fetch_all(&conn, &query).context("failed to read immigration records")?;

    if let Err((_, err)) = conn.close() {
        log::warn!("failed to close database cleanly: {err}");
    }

    Ok(records)
}

/// Best-effort load for startup: any failure is logged and the views come up
/// empty instead of the application aborting.
pub fn load_records(config: &Config) -> Vec<ImmigrationRecord> {
    match try_load_records(config) {
        Ok(records) => {
            log::info!(
                "loaded {} records from {}",
                records.len(),
                config.database.display()
            );
            records
        }
        Err(err) => {
            log::error!("data access failed: {err:#}");
            Vec::new()
        }
    }
}

fn read_year(row: &Row<'_>, index: usize) -> Result<String, DataAccessError> {
    match row.get_ref(0)? {
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|err| malformed(index, format!("year is not valid UTF-8: {err}"))),
        ValueRef::Integer(value) => Ok(value.to_string()),
        ValueRef::Null => Err(malformed(index, "year is NULL")),
        other => Err(malformed(
            index,
            format!("year has unsupported type {}", other.data_type()),
        )),
    }
}

fn read_count(row: &Row<'_>, index: usize) -> Result<u64, DataAccessError> {
    match row.get_ref(1)? {
        ValueRef::Integer(value) => u64::try_from(value)
            .map_err(|_| malformed(index, format!("count {value} is negative"))),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .ok()
            .and_then(|text| text.trim().parse::<u64>().ok())
            .ok_or_else(|| malformed(index, "count is not a non-negative integer")),
        ValueRef::Real(value) if value.fract() == 0.0 && (0.0..U64_LIMIT).contains(&value) => {
            Ok(value as u64)
        }
        ValueRef::Real(value) => Err(malformed(
            index,
            format!("count {value} is not a non-negative whole number"),
        )),
        ValueRef::Null => Err(malformed(index, "count is NULL")),
        other => Err(malformed(
            index,
            format!("count has unsupported type {}", other.data_type()),
        )),
    }
}

fn malformed(row: usize, reason: impl Into<String>) -> DataAccessError {
    DataAccessError::MalformedRow {
        row,
        reason: reason.into(),
    }
}
