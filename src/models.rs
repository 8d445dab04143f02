//! Domain model read from the statistics table. Records are plain values: the
//! UI layers only ever project them into table rows or chart slices, so the
//! type stays a small immutable holder.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One year/count pair as returned by the read query. Fields are private so a
/// record cannot change after it has been built from a row.
pub struct ImmigrationRecord {
    year: String,
    count: u64,
}

impl ImmigrationRecord {
    pub fn new(year: impl Into<String>, count: u64) -> Self {
        Self {
            year: year.into(),
            count,
        }
    }

    /// Year label exactly as stored. Kept as text because some datasets use
    /// ranges such as `2015-2016` rather than a bare number.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Number of immigrants recorded for the year.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl fmt::Display for ImmigrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.year, self.count)
    }
}
