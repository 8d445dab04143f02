//! Tabular view-model: one row per record, year then count, in fetch order.

use ratatui::layout::Constraint;

use crate::models::ImmigrationRecord;

pub const YEAR_HEADER: &str = "Year";
pub const COUNT_HEADER: &str = "Number of Immigrants";

/// Preferred column widths in layout units. Only their ratio matters once
/// they are turned into constraints.
pub const YEAR_PREFERRED_WIDTH: u32 = 800;
pub const COUNT_PREFERRED_WIDTH: u32 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub year: String,
    pub count: u64,
}

impl TableRow {
    /// Displayed cell text, column order.
    pub fn cells(&self) -> [String; 2] {
        [self.year.clone(), self.count.to_string()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableProjection {
    rows: Vec<TableRow>,
}

impl TableProjection {
    pub fn from_records(records: &[ImmigrationRecord]) -> Self {
        let rows = records
            .iter()
            .map(|record| TableRow {
                year: record.year().to_string(),
                count: record.count(),
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Constrained resize: both columns share the full width in proportion to
    /// their preferred widths, so the table never scrolls horizontally.
    pub fn column_constraints() -> [Constraint; 2] {
        let total = YEAR_PREFERRED_WIDTH + COUNT_PREFERRED_WIDTH;
        [
            Constraint::Ratio(YEAR_PREFERRED_WIDTH, total),
            Constraint::Ratio(COUNT_PREFERRED_WIDTH, total),
        ]
    }
}
