//! Pie chart view-model. Slices keep fetch order and take their color from a
//! fixed palette by position, so the same data always renders the same way.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::style::Color;

use crate::models::ImmigrationRecord;

pub const CHART_TITLE: &str = "Immigration Statistics in Canada Pie Chart";
pub const PREFERRED_WIDTH: u16 = 800;
pub const PREFERRED_HEIGHT: u16 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PaletteColor {
    const fn new(name: &'static str, red: u8, green: u8, blue: u8) -> Self {
        Self {
            name,
            red,
            green,
            blue,
        }
    }

    /// Upper-case `RRGGBB`, no leading `#`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.red, self.green, self.blue)
    }
}

pub const PALETTE: [PaletteColor; 10] = [
    PaletteColor::new("green", 0, 128, 0),
    PaletteColor::new("red", 255, 0, 0),
    PaletteColor::new("blue", 0, 0, 255),
    PaletteColor::new("orange", 255, 165, 0),
    PaletteColor::new("purple", 128, 0, 128),
    PaletteColor::new("yellow", 255, 255, 0),
    PaletteColor::new("cyan", 0, 255, 255),
    PaletteColor::new("pink", 255, 192, 203),
    PaletteColor::new("dark orange", 255, 140, 0),
    PaletteColor::new("maroon", 128, 0, 0),
];

pub fn palette_color(index: usize) -> PaletteColor {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    pub color: PaletteColor,
}

#[derive(Debug, Clone, Default)]
pub struct PieChartProjection {
    slices: Vec<PieSlice>,
    total: u128,
    /// Cumulative end of each slice as a fraction of a full turn.
    ends: Vec<f64>,
    last_visible: Option<usize>,
}

impl PieChartProjection {
    pub fn from_records(records: &[ImmigrationRecord]) -> Self {
        let slices: Vec<PieSlice> = records
            .iter()
            .enumerate()
            .map(|(index, record)| PieSlice {
                label: record.year().to_string(),
                value: record.count(),
                color: palette_color(index),
            })
            .collect();
        let total: u128 = slices.iter().map(|slice| u128::from(slice.value)).sum();

        let mut running = 0u128;
        let ends = slices
            .iter()
            .map(|slice| {
                running += u128::from(slice.value);
                if total == 0 {
                    0.0
                } else {
                    running as f64 / total as f64
                }
            })
            .collect();
        let last_visible = slices.iter().rposition(|slice| slice.value > 0);

        Self {
            slices,
            total,
            ends,
            last_visible,
        }
    }

    pub fn title(&self) -> &'static str {
        CHART_TITLE
    }

    pub fn slices(&self) -> &[PieSlice] {
        &self.slices
    }

    pub fn total(&self) -> u128 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Share of the whole taken by slice `index`, in `0.0..=1.0`. Zero when
    /// every count is zero.
    pub fn fraction(&self, index: usize) -> f64 {
        match self.slices.get(index) {
            Some(slice) if self.total > 0 => slice.value as f64 / self.total as f64,
            _ => 0.0,
        }
    }

    /// Slice covering a position on the circumference, given as a fraction of
    /// a full turn measured clockwise from twelve o'clock.
    pub fn slice_at(&self, turn: f64) -> Option<usize> {
        // Zero-count slices share their predecessor's end, so the first end
        // past `turn` always belongs to a visible slice.
        let index = self.ends.partition_point(|end| *end <= turn);
        if index < self.slices.len() {
            Some(index)
        } else {
            // Rounding can leave the last end a hair below 1.0.
            self.last_visible
        }
    }

    /// Sample the unit disc on a `columns` x `rows` grid and bucket every point
    /// inside it by slice. The returned vector is indexed like `slices()`.
    pub fn rasterize(&self, columns: usize, rows: usize) -> Vec<Vec<(f64, f64)>> {
        let mut buckets = vec![Vec::new(); self.slices.len()];
        if columns == 0 || rows == 0 || self.total == 0 {
            return buckets;
        }

        for row in 0..rows {
            let y = 1.0 - (row as f64 + 0.5) * 2.0 / rows as f64;
            for column in 0..columns {
                let x = -1.0 + (column as f64 + 0.5) * 2.0 / columns as f64;
                if x * x + y * y > 1.0 {
                    continue;
                }
                let turn = ((FRAC_PI_2 - y.atan2(x)) / TAU).rem_euclid(1.0);
                if let Some(index) = self.slice_at(turn) {
                    buckets[index].push((x, y));
                }
            }
        }

        buckets
    }
}
