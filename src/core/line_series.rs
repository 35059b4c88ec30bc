use serde::{Deserialize, Serialize};

use crate::core::{IndexRange, Series, TimeRange};

/// Point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Maps series `(time, value)` pairs into a plot rectangle.
///
/// The visible time range spans the full width; `0` sits on the bottom edge
/// and the axis ceiling on the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotProjection {
    time_range: TimeRange,
    ceiling: f64,
    width: f64,
    height: f64,
}

impl PlotProjection {
    #[must_use]
    pub fn new(time_range: TimeRange, ceiling: f64, width: f64, height: f64) -> Self {
        Self {
            time_range,
            ceiling,
            width,
            height,
        }
    }

    #[must_use]
    pub fn time_range(self) -> TimeRange {
        self.time_range
    }

    #[must_use]
    pub fn ceiling(self) -> f64 {
        self.ceiling
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }

    /// Pixels per second of series time.
    #[must_use]
    pub fn scale_x(self) -> f64 {
        let duration = self.time_range.duration();
        if duration > 0 {
            self.width / duration as f64
        } else {
            0.0
        }
    }

    /// Pixels per value unit.
    #[must_use]
    pub fn scale_y(self) -> f64 {
        if self.ceiling.is_finite() && self.ceiling > 0.0 {
            self.height / self.ceiling
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn time_to_x(self, time: i64) -> f64 {
        (time - self.time_range.from) as f64 * self.scale_x()
    }

    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        self.height - value * self.scale_y()
    }
}

/// Projects the visible columns of `series` into a polyline.
///
/// Pure and side-effect free, so rendering and tests consume the same geometry.
#[must_use]
pub fn project_series_polyline(
    series: &Series,
    indexes: IndexRange,
    projection: PlotProjection,
) -> Vec<PlotPoint> {
    let columns = series.columns();
    let Some(last) = columns.len().checked_sub(1) else {
        return Vec::new();
    };
    let to = indexes.to.min(last);
    if indexes.from > to {
        return Vec::new();
    }

    columns[indexes.from..=to]
        .iter()
        .map(|column| PlotPoint {
            x: projection.time_to_x(column.time),
            y: projection.value_to_y(column.value as f64),
        })
        .collect()
}
