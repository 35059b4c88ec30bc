use scope_chart::ChartResult;
use scope_chart::api::{ChartEngine, ChartEngineConfig, ChartTheme, ColorScheme};
use scope_chart::core::{Column, Scope, Series, Viewport};
use scope_chart::render::{FrameTarget, NullRenderer, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Default)]
struct RecordingRenderer {
    frames: Vec<RenderFrame>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames.push(frame.clone());
        Ok(())
    }
}

fn series(name: &str, color: &str, values: &[i64]) -> Series {
    let columns = values
        .iter()
        .enumerate()
        .map(|(i, value)| Column::new(1_551_744_000 + i as i64 * 86_400, *value))
        .collect();
    Series::new(name, color, columns).expect("valid series")
}

fn two_series() -> Vec<Series> {
    vec![
        series("low", "#3DC23F", &[10, 20, 50, 30, 40, 20, 10, 5, 15, 25]),
        series("high", "#F34C44", &[30, 60, 100, 90, 70, 40, 20, 15, 35, 45]),
    ]
}

fn config() -> ChartEngineConfig {
    ChartEngineConfig::new(Viewport::new(400, 300), Viewport::new(400, 50))
        .with_initial_scope(Scope::FULL)
}

fn rendered_frames(engine: ChartEngine<RecordingRenderer>) -> (RenderFrame, RenderFrame) {
    let mut frames = engine.into_renderer().frames;
    let history = frames.pop().expect("history frame");
    let main = frames.pop().expect("main frame");
    (main, history)
}

#[test]
fn render_draws_main_chart_then_history_strip() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config(), two_series()).expect("engine init");
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_polyline_count, 2);
    assert_eq!(renderer.last_history_polyline_count, 2);
    // zero line plus five grid lines of the single settled level.
    assert_eq!(renderer.last_line_count, 6);
}

#[test]
fn grid_lines_divide_the_level_into_equal_steps() {
    let mut engine = ChartEngine::new(RecordingRenderer::default(), config(), two_series())
        .expect("engine init");
    engine.render().expect("render");
    let (main, _) = rendered_frames(engine);

    assert_eq!(main.target, FrameTarget::MainChart);
    let labels: Vec<&str> = main
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Left)
        .map(|text| text.text.as_str())
        .collect();
    // ceiling 110 with 5 levels: steps of 110 / 6.
    assert_eq!(labels, vec!["0", "18", "36", "55", "73", "91"]);
}

#[test]
fn date_labels_fill_the_bottom_band() {
    let mut engine = ChartEngine::new(RecordingRenderer::default(), config(), two_series())
        .expect("engine init");
    engine.render().expect("render");
    let (main, _) = rendered_frames(engine);

    let dates: Vec<&str> = main
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(dates.first().copied(), Some("Mar 05"));
    assert!(dates.len() >= 6);
    assert!(
        main.texts
            .iter()
            .filter(|text| text.h_align == TextHAlign::Center)
            .all(|text| text.y > 250.0)
    );
}

#[test]
fn hidden_series_stop_drawing_once_faded() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config(), two_series()).expect("engine init");
    engine.set_series_hidden(0, true).expect("index in range");

    engine.render().expect("render mid fade");
    assert_eq!(engine.renderer().last_polyline_count, 2);

    engine.advance_animations(0.2);
    engine.render().expect("render after fade");
    assert_eq!(engine.renderer().last_polyline_count, 1);
    assert_eq!(engine.renderer().last_history_polyline_count, 1);
}

#[test]
fn selection_adds_guide_markers_and_tooltip_panel() {
    let mut engine = ChartEngine::new(RecordingRenderer::default(), config(), two_series())
        .expect("engine init");
    engine.tap(0.5);

    let point = engine.selected_point().expect("point selected");
    assert_eq!(point.index, 4);
    assert_eq!(point.time, 1_551_744_000 + 4 * 86_400);
    let values: Vec<i64> = point.values.iter().map(|value| value.value).collect();
    assert_eq!(values, vec![40, 70]);

    engine.render().expect("render");
    let (main, _) = rendered_frames(engine);
    assert_eq!(main.lines.len(), 7);
    assert_eq!(main.circles.len(), 2);
    assert_eq!(main.overlay_rects.len(), 1);

    let tooltip_texts: Vec<&str> = main
        .texts
        .iter()
        .filter(|text| text.bold || text.h_align == TextHAlign::Right)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(tooltip_texts, vec!["Mar 09", "40", "70"]);
    assert!(main.texts.iter().any(|text| text.text == "2019"));
}

#[test]
fn history_strip_shows_window_chrome() {
    let config = ChartEngineConfig::new(Viewport::new(400, 300), Viewport::new(400, 50));
    let mut engine =
        ChartEngine::new(RecordingRenderer::default(), config, two_series()).expect("engine init");
    engine.render().expect("render");
    let (_, history) = rendered_frames(engine);

    assert_eq!(history.target, FrameTarget::HistoryStrip);
    assert_eq!(history.polylines.len(), 2);
    // two fades, the window border and two handles.
    assert_eq!(history.overlay_rects.len(), 5);
    assert_eq!(history.overlay_lines.len(), 4);
    let left_fade = history.overlay_rects[0];
    assert!((left_fade.width - 280.0).abs() <= 1e-9);
}

#[test]
fn color_scheme_switch_changes_background() {
    let mut engine = ChartEngine::new(RecordingRenderer::default(), config(), two_series())
        .expect("engine init");
    engine.set_color_scheme(ColorScheme::Night);
    assert_eq!(engine.theme(), ChartTheme::night());
    engine.render().expect("render");
    let (main, _) = rendered_frames(engine);
    assert_eq!(main.rects[0].fill_color, ChartTheme::night().background);
}
