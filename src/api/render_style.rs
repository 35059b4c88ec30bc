use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Geometry and typography used by the frame builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub series_line_width_px: f64,
    pub history_line_width_px: f64,
    pub grid_line_width_px: f64,
    pub axis_label_font_size_px: f64,
    pub axis_label_offset_px: f64,
    pub date_label_height_px: f64,
    pub date_band_spacing_px: f64,
    pub tooltip_font_size_px: f64,
    pub tooltip_horizontal_margin_px: f64,
    pub tooltip_vertical_margin_px: f64,
    pub tooltip_row_spacing_px: f64,
    pub tooltip_column_spacing_px: f64,
    pub tooltip_corner_radius_px: f64,
    pub marker_radius_px: f64,
    pub range_border_width_px: f64,
    pub range_corner_radius_px: f64,
    pub handle_arrow_width_px: f64,
    pub handle_arrow_height_px: f64,
    pub handle_arrow_line_width_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            series_line_width_px: 2.0,
            history_line_width_px: 1.0,
            grid_line_width_px: 0.4,
            axis_label_font_size_px: 12.0,
            axis_label_offset_px: 2.0,
            date_label_height_px: 14.0,
            date_band_spacing_px: 4.0,
            tooltip_font_size_px: 13.0,
            tooltip_horizontal_margin_px: 10.0,
            tooltip_vertical_margin_px: 6.0,
            tooltip_row_spacing_px: 6.0,
            tooltip_column_spacing_px: 20.0,
            tooltip_corner_radius_px: 4.0,
            marker_radius_px: 4.0,
            range_border_width_px: 1.4,
            range_corner_radius_px: 2.0,
            handle_arrow_width_px: 5.0,
            handle_arrow_height_px: 14.0,
            handle_arrow_line_width_px: 2.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("series_line_width_px", self.series_line_width_px),
            ("history_line_width_px", self.history_line_width_px),
            ("grid_line_width_px", self.grid_line_width_px),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("tooltip_font_size_px", self.tooltip_font_size_px),
            ("marker_radius_px", self.marker_radius_px),
            ("handle_arrow_line_width_px", self.handle_arrow_line_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("axis_label_offset_px", self.axis_label_offset_px),
            ("date_label_height_px", self.date_label_height_px),
            ("date_band_spacing_px", self.date_band_spacing_px),
            ("tooltip_horizontal_margin_px", self.tooltip_horizontal_margin_px),
            ("tooltip_vertical_margin_px", self.tooltip_vertical_margin_px),
            ("tooltip_row_spacing_px", self.tooltip_row_spacing_px),
            ("tooltip_column_spacing_px", self.tooltip_column_spacing_px),
            ("tooltip_corner_radius_px", self.tooltip_corner_radius_px),
            ("range_border_width_px", self.range_border_width_px),
            ("range_corner_radius_px", self.range_corner_radius_px),
            ("handle_arrow_width_px", self.handle_arrow_width_px),
            ("handle_arrow_height_px", self.handle_arrow_height_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}
