use crate::core::{Scope, Series};

/// Evenly spaced date tick times across the whole series.
///
/// The tick count grows as the scope shrinks so roughly `visible_dates` ticks
/// stay on screen at any zoom level.
#[must_use]
pub fn plan_date_ticks(series: &Series, scope: Scope, visible_dates: usize) -> Vec<i64> {
    let visible_length = (series.span() as f64 * scope.length()) as i64;
    if visible_dates == 0 || visible_length <= 0 {
        return Vec::new();
    }
    let count = ((visible_dates as f64 * series.span() as f64) / visible_length as f64) as i64;
    if count <= 0 {
        return Vec::new();
    }

    let step = (series.span() / count).max(1);
    let end = series.last_time();
    let mut ticks = Vec::with_capacity(count as usize + 1);
    let mut time = series.first_time();
    while time <= end {
        ticks.push(time);
        time += step;
    }
    ticks
}
