use criterion::{Criterion, criterion_group, criterion_main};
use scope_chart::api::{ChartEngine, ChartEngineConfig};
use scope_chart::core::{
    Column, Scope, Series, TimeRange, Viewport, VisibilityVector, compute_peaks, dedup_levels,
    map_time_range_to_indexes, plan_levels, visible_indexes_count,
};
use scope_chart::interaction::GestureInput;
use scope_chart::render::NullRenderer;
use scope_chart::telemetry::init_default_tracing;
use std::hint::black_box;

fn generated_series(name: &str, len: i64, phase: i64) -> Series {
    let columns = (0..len)
        .map(|i| Column::new(i * 86_400, 1_000 + ((i * 37 + phase) % 500) * 20))
        .collect();
    Series::new(name, "#3DC23F", columns).expect("valid generated series")
}

fn bench_index_mapping_10k(c: &mut Criterion) {
    let series = generated_series("a", 10_000, 0);
    let range = TimeRange::new(3_000 * 86_400 + 7, 7_500 * 86_400 - 11);

    c.bench_function("index_mapping_10k", |b| {
        b.iter(|| map_time_range_to_indexes(black_box(series.columns()), black_box(range)))
    });
}

fn bench_level_planning_10k(c: &mut Criterion) {
    let series = vec![
        generated_series("a", 10_000, 0),
        generated_series("b", 10_000, 113),
    ];
    let visibility = VisibilityVector::all_visible(series.len());
    let peaks = compute_peaks(&series, &visibility);
    let window = visible_indexes_count(&series[0], Scope::new(0.7, 1.0));

    c.bench_function("level_planning_10k", |b| {
        b.iter(|| dedup_levels(plan_levels(black_box(&peaks), black_box(window), 5)))
    });
}

fn bench_history_drag_render_2k(c: &mut Criterion) {
    let _ = init_default_tracing();
    let series = vec![
        generated_series("a", 2_000, 0),
        generated_series("b", 2_000, 211),
    ];
    let config = ChartEngineConfig::new(Viewport::new(1600, 900), Viewport::new(1600, 80));
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config, series).expect("engine init");
    engine.handle_history_gesture(GestureInput::begin(0.85));

    let mut step = 0_u32;
    c.bench_function("history_drag_render_2k", |b| {
        b.iter(|| {
            step = (step + 1) % 100;
            let x = 0.2 + f64::from(step) * 0.006;
            let _ = engine.handle_history_gesture(black_box(GestureInput::moved(x)));
            engine.render().expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_index_mapping_10k,
    bench_level_planning_10k,
    bench_history_drag_render_2k
);
criterion_main!(benches);
