pub mod date_ticks;
pub mod index_mapper;
pub mod levels;
pub mod line_series;
pub mod scope;
pub mod types;
pub mod visibility;

pub use date_ticks::plan_date_ticks;
pub use index_mapper::{
    half_sample_interval, map_time_range_to_indexes, nearest_column_index, time_range_for_scope,
    visible_indexes,
};
pub use levels::{
    Level, LevelBlend, LevelPair, LevelPlanner, blend_levels, blend_ratio, calculate_level,
    compute_peaks, dedup_levels, level_transition, plan_levels, target_levels,
    visible_indexes_count,
};
pub use line_series::{PlotPoint, PlotProjection, project_series_polyline};
pub use scope::{SCOPE_PRECISION, Scope};
pub use types::{Column, IndexRange, MIN_SERIES_COLUMNS, Series, TimeRange, Viewport};
pub use visibility::{VISIBLE_OPACITY_THRESHOLD, VisibilityTransition, VisibilityVector};
