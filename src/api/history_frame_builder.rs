use crate::core::{PlotProjection, VISIBLE_OPACITY_THRESHOLD, project_series_polyline};
use crate::render::{
    Color, FrameTarget, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer,
};

use super::ChartEngine;
use super::render_frame_builder::series_color;

/// Builds the history strip frame: full-span series lines, fades outside the
/// selected window, the window border and both drag handles with arrows.
pub(super) fn build_history_frame<R: Renderer>(engine: &ChartEngine<R>) -> RenderFrame {
    let viewport = engine.config.history_viewport;
    let style = engine.config.render_style;
    let theme = engine.theme;
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    let mut frame = RenderFrame::new(FrameTarget::HistoryStrip, viewport)
        .with_rect(RectPrimitive::new(0.0, 0.0, width, height, theme.background));

    if let (Some(time_range), Some(indexes)) =
        (engine.history.time_range(), engine.history.visible_indexes())
    {
        let ceiling = engine.history.presented_blend().ceiling();
        let projection = PlotProjection::new(time_range, ceiling, width, height);
        let opacities = engine.history.presented_opacities();
        for (index, series) in engine.history.series().iter().enumerate() {
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
                style.history_line_width_px,
                series_color(series, theme),
                opacity,
            ));
        }
    }

    let left = engine.range_selector.from() * width;
    let right = engine.range_selector.to() * width;
    frame.overlay_rects.push(RectPrimitive::new(0.0, 0.0, left, height, theme.history_fade));
    frame.overlay_rects.push(RectPrimitive::new(
        right,
        0.0,
        (width - right).max(0.0),
        height,
        theme.history_fade,
    ));

    let border = style.range_border_width_px;
    frame.overlay_rects.push(
        RectPrimitive::new(
            left,
            -border,
            right - left,
            height + border * 2.0,
            Color::rgba(0.0, 0.0, 0.0, 0.0),
        )
        .with_corner_radius(style.range_corner_radius_px)
        .with_border(border, theme.range_border),
    );

    let handle_width = engine
        .range_selector
        .config()
        .handle_width_px
        .min((right - left) / 2.0);
    for handle_x in [left, right - handle_width] {
        frame.overlay_rects.push(RectPrimitive::new(
            handle_x,
            0.0,
            handle_width,
            height,
            theme.range_border,
        ));
    }
    push_handle_arrow(&mut frame, engine, left + handle_width / 2.0, height, -1.0);
    push_handle_arrow(&mut frame, engine, right - handle_width / 2.0, height, 1.0);

    frame
}

/// Chevron centered in a handle; `direction` is `-1` for `<` and `1` for `>`.
fn push_handle_arrow<R: Renderer>(
    frame: &mut RenderFrame,
    engine: &ChartEngine<R>,
    center_x: f64,
    height: f64,
    direction: f64,
) {
    let style = engine.config.render_style;
    let color = engine.theme.handle_arrow;
    let half_width = style.handle_arrow_width_px / 2.0;
    let top = height / 2.0 - style.handle_arrow_height_px / 2.0;
    let middle = height / 2.0;
    let bottom = top + style.handle_arrow_height_px;
    let back_x = center_x - direction * half_width;
    let tip_x = center_x + direction * half_width;

    frame.overlay_lines.push(LinePrimitive::new(
        back_x,
        top,
        tip_x,
        middle,
        style.handle_arrow_line_width_px,
        color,
    ));
    frame.overlay_lines.push(LinePrimitive::new(
        tip_x,
        middle,
        back_x,
        bottom,
        style.handle_arrow_line_width_px,
        color,
    ));
}
