use approx::assert_abs_diff_eq;
use scope_chart::animation::DEFAULT_ANIMATION_DURATION_SECONDS;
use scope_chart::api::{ChartEngine, ChartEngineConfig};
use scope_chart::core::{
    Column, IndexRange, Level, LevelBlend, Scope, Series, Viewport, level_transition,
};
use scope_chart::render::NullRenderer;

fn series(values: &[i64], time: impl Fn(usize) -> i64) -> Series {
    let columns = values
        .iter()
        .enumerate()
        .map(|(i, value)| Column::new(time(i), *value))
        .collect();
    Series::new("load", "#3DC23F", columns).expect("valid series")
}

fn engine(series: Series, initial_scope: Scope) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(400, 300), Viewport::new(400, 50))
        .with_initial_scope(initial_scope);
    ChartEngine::new(NullRenderer::default(), config, vec![series]).expect("engine init")
}

fn spiked_engine() -> ChartEngine<NullRenderer> {
    let values = [10, 10, 10, 10, 100, 20, 20, 20, 50, 50, 50];
    engine(series(&values, |i| i as i64 * 100), Scope::new(0.0, 0.5))
}

fn assert_blend_eq(actual: LevelBlend, expected: LevelBlend) {
    assert_abs_diff_eq!(actual.from, expected.from, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.to, expected.to, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.ratio, expected.ratio, epsilon = 1e-9);
}

#[test]
fn zoom_that_snaps_onto_a_level_animates_the_axis() {
    let mut engine = spiked_engine();
    assert_eq!(engine.levels(), &[Level::new(110, 0), Level::new(55, 10)]);
    let previous = engine.axis_blend();
    assert_eq!(previous, LevelBlend::new(110.0, 55.0, 0.0));
    assert!(!engine.is_animating());

    engine.set_scope(Scope::new(0.6, 1.0));
    assert_eq!(
        engine.levels(),
        &[Level::new(11, 0), Level::new(110, 4), Level::new(55, 10)]
    );
    assert_eq!(engine.visible_indexes(), Some(IndexRange::new(6, 10)));
    assert_eq!(engine.axis_blend(), LevelBlend::new(110.0, 55.0, 1.0));

    assert!(engine.is_animating());
    let (start, _) = level_transition(previous, engine.axis_blend());
    assert_blend_eq(engine.presented_axis_blend(), start);
    assert_abs_diff_eq!(engine.presented_axis_blend().ceiling(), 110.0, epsilon = 1e-9);

    assert!(!engine.advance_animations(DEFAULT_ANIMATION_DURATION_SECONDS));
    assert_eq!(engine.presented_axis_blend(), engine.axis_blend());
    assert_eq!(engine.presented_axis_blend().ceiling(), 55.0);
}

#[test]
fn pan_without_replan_moves_the_axis_immediately() {
    let mut engine = spiked_engine();
    let levels_before = engine.levels().to_vec();

    engine.set_scope(Scope::new(0.5, 1.0));
    assert_eq!(engine.levels(), levels_before.as_slice());
    assert_eq!(engine.visible_indexes(), Some(IndexRange::new(5, 10)));
    assert!(!engine.is_animating());
    assert_eq!(engine.presented_axis_blend(), engine.axis_blend());
    assert_eq!(engine.axis_blend().ceiling(), 55.0);
}

#[test]
fn zero_span_series_uses_the_nearest_level() {
    let mut engine = engine(series(&[10, 20, 30, 40], |_| 5), Scope::new(0.7, 1.0));

    assert_eq!(
        engine.levels(),
        &[Level::new(11, 0), Level::new(22, 1), Level::new(33, 3)]
    );
    assert_eq!(engine.visible_indexes(), Some(IndexRange::new(3, 3)));

    let tail = *engine.levels().last().expect("levels planned");
    assert_eq!(engine.axis_blend(), LevelBlend::single(tail.value as f64));
    engine.render().expect("zero-span frame renders");
}
