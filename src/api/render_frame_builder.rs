use tracing::warn;

use crate::core::{
    LevelBlend, PlotProjection, Series, VISIBLE_OPACITY_THRESHOLD, project_series_polyline,
};
use crate::render::{
    Color, FrameTarget, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive,
};

use super::label_format::{estimate_label_text_width_px, format_date_label, format_value_label};
use super::{ChartEngine, ChartEngineConfig, ChartTheme, RenderStyle, tooltip_builder};

/// Builds the main chart frame: background, grid with value labels, series
/// lines, date labels and the selection tooltip.
pub(super) fn build_main_frame<R: Renderer>(engine: &ChartEngine<R>) -> RenderFrame {
    let config = &engine.config;
    let viewport = config.main_viewport;
    let style = config.render_style;
    let theme = engine.theme;
    let width = f64::from(viewport.width);

    let mut frame = RenderFrame::new(FrameTarget::MainChart, viewport).with_rect(
        RectPrimitive::new(0.0, 0.0, width, f64::from(viewport.height), theme.background),
    );
    let (Some(time_range), Some(indexes)) =
        (engine.main.time_range(), engine.main.visible_indexes())
    else {
        return frame;
    };

    let blend = engine.main.presented_blend();
    let projection = PlotProjection::new(time_range, blend.ceiling(), width, plot_height(config));

    push_grid(
        &mut frame,
        projection,
        blend,
        engine.main.level_count(),
        style,
        theme,
    );

    let opacities = engine.main.presented_opacities();
    for (index, series) in engine.main.series().iter().enumerate() {
        let opacity = opacities.get(index).copied().unwrap_or(0.0).clamp(0.0, 1.0);
        if opacity < VISIBLE_OPACITY_THRESHOLD {
            continue;
        }
        let points = project_series_polyline(series, indexes, projection);
        if points.len() < 2 {
            continue;
        }
        frame.polylines.push(PolylinePrimitive::new(
            points,
            style.series_line_width_px,
            series_color(series, theme),
            opacity,
        ));
    }

    if config.show_dates {
        push_date_labels(&mut frame, engine.main.date_ticks(), projection, style, theme);
    }

    tooltip_builder::push_tooltip(&mut frame, engine, projection);
    frame
}

/// Height of the plot area above the date band.
pub(super) fn plot_height(config: &ChartEngineConfig) -> f64 {
    let height = f64::from(config.main_viewport.height);
    if !config.show_dates {
        return height;
    }
    let style = config.render_style;
    let band = style.date_label_height_px + style.date_band_spacing_px * 2.0;
    (height - band).max(1.0)
}

pub(super) fn series_color(series: &Series, theme: ChartTheme) -> Color {
    Color::from_hex(series.color_hex()).unwrap_or_else(|err| {
        warn!(
            series = series.name(),
            error = %err,
            "invalid series color, using axis text color"
        );
        theme.axis_text
    })
}

fn push_grid(
    frame: &mut RenderFrame,
    projection: PlotProjection,
    blend: LevelBlend,
    level_count: usize,
    style: RenderStyle,
    theme: ChartTheme,
) {
    let width = projection.width();
    let baseline = projection.value_to_y(0.0);
    frame.lines.push(LinePrimitive::new(
        0.0,
        baseline,
        width,
        baseline,
        style.grid_line_width_px,
        theme.zero_line,
    ));
    push_value_label(frame, 0.0, baseline, 1.0, style, theme);

    if level_count == 0 {
        return;
    }
    let pairs = if blend.from == blend.to {
        vec![(blend.from, 1.0)]
    } else {
        vec![(blend.from, 1.0 - blend.ratio), (blend.to, blend.ratio)]
    };

    for (level, alpha) in pairs {
        if alpha <= 0.0 || level <= 0.0 {
            continue;
        }
        let divisions = (level_count + 1) as f64;
        for row in 1..=level_count {
            let value = level * row as f64 / divisions;
            let y = projection.value_to_y(value);
            if !(0.0..=baseline).contains(&y) {
                continue;
            }
            frame.lines.push(LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                style.grid_line_width_px,
                theme.grid_line.with_alpha_factor(alpha),
            ));
            push_value_label(frame, value, y, alpha, style, theme);
        }
    }
}

fn push_value_label(
    frame: &mut RenderFrame,
    value: f64,
    line_y: f64,
    alpha: f64,
    style: RenderStyle,
    theme: ChartTheme,
) {
    let top = line_y - style.axis_label_offset_px - style.axis_label_font_size_px;
    frame.texts.push(TextPrimitive::new(
        format_value_label(value as i64),
        0.0,
        top,
        style.axis_label_font_size_px,
        theme.axis_text.with_alpha_factor(alpha),
        TextHAlign::Left,
    ));
}

fn push_date_labels(
    frame: &mut RenderFrame,
    ticks: &[i64],
    projection: PlotProjection,
    style: RenderStyle,
    theme: ChartTheme,
) {
    let top = projection.height() + style.date_band_spacing_px;
    for time in ticks {
        let x = projection.time_to_x(*time);
        let text = format_date_label(*time);
        let half_width = estimate_label_text_width_px(&text, style.axis_label_font_size_px) / 2.0;
        if x + half_width < 0.0 || x - half_width > projection.width() {
            continue;
        }
        frame.texts.push(TextPrimitive::new(
            text,
            x,
            top,
            style.axis_label_font_size_px,
            theme.axis_text,
            TextHAlign::Center,
        ));
    }
}
