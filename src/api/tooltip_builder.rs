use crate::core::PlotProjection;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::label_format::{
    estimate_label_text_width_px, format_date_label, format_value_label, format_year_label,
};
use super::render_frame_builder::series_color;
use super::{ChartEngine, SelectedPoint};

/// Appends the selection guide line, point markers and the tooltip panel.
///
/// Nothing is drawn when no point is selected or the selected column has
/// scrolled out of the plot.
pub(super) fn push_tooltip<R: Renderer>(
    frame: &mut RenderFrame,
    engine: &ChartEngine<R>,
    projection: PlotProjection,
) {
    let Some(point) = engine.selected_point() else {
        return;
    };
    let x = projection.time_to_x(point.time);
    if !x.is_finite() || x < 0.0 || x > projection.width() {
        return;
    }

    let style = engine.config.render_style;
    let theme = engine.theme;
    frame.lines.push(LinePrimitive::new(
        x,
        0.0,
        x,
        projection.height(),
        style.grid_line_width_px,
        theme.zero_line,
    ));

    let opacities = engine.main.presented_opacities();
    let mut value_colors = Vec::with_capacity(point.values.len());
    for value in &point.values {
        let Some(series) = engine.main.series().get(value.series_index) else {
            continue;
        };
        let opacity = opacities
            .get(value.series_index)
            .copied()
            .unwrap_or(1.0)
            .clamp(0.0, 1.0);
        let color = series_color(series, theme).with_alpha_factor(opacity);
        value_colors.push(color);
        frame.circles.push(CirclePrimitive {
            center_x: x,
            center_y: projection.value_to_y(value.value as f64),
            radius: style.marker_radius_px,
            fill_color: theme.background,
            stroke_width: style.series_line_width_px,
            stroke_color: color,
        });
    }

    push_panel(frame, engine, &point, &value_colors, x, projection.width());
}

fn push_panel<R: Renderer>(
    frame: &mut RenderFrame,
    engine: &ChartEngine<R>,
    point: &SelectedPoint,
    value_colors: &[Color],
    anchor_x: f64,
    plot_width: f64,
) {
    let style = engine.config.render_style;
    let theme = engine.theme;
    let font = style.tooltip_font_size_px;

    let date = format_date_label(point.time);
    let year = format_year_label(point.time);
    let values: Vec<String> = point
        .values
        .iter()
        .map(|value| format_value_label(value.value))
        .collect();

    let date_width = estimate_label_text_width_px(&date, font)
        .max(estimate_label_text_width_px(&year, font));
    let values_width = values
        .iter()
        .map(|text| estimate_label_text_width_px(text, font))
        .fold(0.0, f64::max);
    let rows = values.len().max(2);

    let panel_width = style.tooltip_horizontal_margin_px * 2.0
        + date_width
        + style.tooltip_column_spacing_px
        + values_width;
    let panel_height = style.tooltip_vertical_margin_px * 2.0
        + font * rows as f64
        + style.tooltip_row_spacing_px * (rows - 1) as f64;
    let panel_x = (anchor_x - panel_width / 2.0)
        .min(plot_width - panel_width)
        .max(0.0);
    let panel_y = style.tooltip_vertical_margin_px;

    frame.overlay_rects.push(
        RectPrimitive::new(
            panel_x,
            panel_y,
            panel_width,
            panel_height,
            theme.tooltip_background,
        )
        .with_corner_radius(style.tooltip_corner_radius_px),
    );

    let text_x = panel_x + style.tooltip_horizontal_margin_px;
    let row_y = |row: usize| {
        panel_y
            + style.tooltip_vertical_margin_px
            + (font + style.tooltip_row_spacing_px) * row as f64
    };
    frame.texts.push(
        TextPrimitive::new(
            date,
            text_x,
            row_y(0),
            font,
            theme.tooltip_date_text,
            TextHAlign::Left,
        )
        .bold(),
    );
    frame.texts.push(TextPrimitive::new(
        year,
        text_x,
        row_y(1),
        font,
        theme.tooltip_date_text,
        TextHAlign::Left,
    ));

    let values_x = panel_x + panel_width - style.tooltip_horizontal_margin_px;
    for (row, (text, color)) in values.into_iter().zip(value_colors).enumerate() {
        frame.texts.push(
            TextPrimitive::new(text, values_x, row_y(row), font, *color, TextHAlign::Right).bold(),
        );
    }
}
