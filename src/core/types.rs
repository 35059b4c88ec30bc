use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Minimum number of samples a series needs to be plotted and searched.
pub const MIN_SERIES_COLUMNS: usize = 3;

/// Pixel bounds of one drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One `(time, value)` sample. Time is expressed in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub time: i64,
    pub value: i64,
}

impl Column {
    #[must_use]
    pub const fn new(time: i64, value: i64) -> Self {
        Self { time, value }
    }
}

/// Immutable named time series.
///
/// Columns are shared behind an `Arc`, so cloning a series for another chart
/// widget is cheap and never aliases mutable state. Visibility lives in a
/// per-view [`crate::core::VisibilityVector`], not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    span: i64,
    columns: Arc<[Column]>,
    name: String,
    color_hex: String,
}

impl Series {
    pub fn new(
        name: impl Into<String>,
        color_hex: impl Into<String>,
        columns: Vec<Column>,
    ) -> ChartResult<Self> {
        let name = name.into();
        if columns.len() < MIN_SERIES_COLUMNS {
            return Err(ChartError::InvalidData(format!(
                "series `{name}` needs at least {MIN_SERIES_COLUMNS} columns, got {}",
                columns.len()
            )));
        }
        if columns.windows(2).any(|pair| pair[1].time < pair[0].time) {
            return Err(ChartError::InvalidData(format!(
                "series `{name}` times must be non-decreasing"
            )));
        }

        let span = columns[columns.len() - 1].time - columns[0].time;
        Ok(Self {
            span,
            columns: columns.into(),
            name,
            color_hex: color_hex.into(),
        })
    }

    /// Time distance between the first and last sample.
    #[must_use]
    pub fn span(&self) -> i64 {
        self.span
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color_hex(&self) -> &str {
        &self.color_hex
    }

    #[must_use]
    pub fn first_time(&self) -> i64 {
        self.columns[0].time
    }

    #[must_use]
    pub fn last_time(&self) -> i64 {
        self.columns[self.columns.len() - 1].time
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always `false` for a constructed series; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Absolute time window in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: i64,
    pub to: i64,
}

impl TimeRange {
    #[must_use]
    pub const fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn duration(self) -> i64 {
        self.to - self.from
    }
}

/// Inclusive column index bounds inside one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub from: usize,
    pub to: usize,
}

impl IndexRange {
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.from && index <= self.to
    }
}
