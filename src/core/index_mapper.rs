use crate::core::{Column, IndexRange, Scope, Series, TimeRange};

/// Returns the tightest inclusive index bracket whose time span covers `range`.
///
/// `from` is the last column at or before `range.from`, `to` the first column
/// (never the first sample) at or after `range.to`. Out-of-span ranges
/// degenerate to the first or last index, and `from <= to` always holds.
#[must_use]
pub fn map_time_range_to_indexes(columns: &[Column], range: TimeRange) -> IndexRange {
    if columns.len() < 2 {
        return IndexRange::new(0, 0);
    }
    let last = columns.len() - 1;

    let at_or_before_from = columns.partition_point(|column| column.time <= range.from);
    let from = at_or_before_from.saturating_sub(1);

    let first_at_or_after_to = columns.partition_point(|column| column.time < range.to);
    let to = first_at_or_after_to.clamp(1, last).max(from);

    IndexRange::new(from, to)
}

/// Converts a normalized scope into absolute series time.
///
/// Offsets are truncated toward zero so the range always biases toward the
/// visible side instead of rounding past it.
#[must_use]
pub fn time_range_for_scope(series: &Series, scope: Scope) -> TimeRange {
    let span = series.span() as f64;
    let from_offset = (span * scope.from()) as i64;
    let to_offset = (span * (1.0 - scope.to())) as i64;
    TimeRange::new(
        series.first_time() + from_offset,
        series.last_time() - to_offset,
    )
}

/// Visible column bounds of `series` for `scope`.
#[must_use]
pub fn visible_indexes(series: &Series, scope: Scope) -> IndexRange {
    map_time_range_to_indexes(series.columns(), time_range_for_scope(series, scope))
}

/// Half of the distance between the first two samples.
#[must_use]
pub fn half_sample_interval(series: &Series) -> i64 {
    let columns = series.columns();
    (columns[1].time - columns[0].time) / 2
}

/// Finds the column nearest to `time` by mapping a `±half_sample_interval`
/// window around it.
///
/// The result is the window's left bound, so a `time` sitting exactly on
/// column `k` (for `k > 0`) maps to `k - 1`. Only times at least half an
/// interval past column `k` map to `k`.
#[must_use]
pub fn nearest_column_index(series: &Series, time: i64) -> usize {
    let half = half_sample_interval(series);
    let window = TimeRange::new(time - half, time + half);
    map_time_range_to_indexes(series.columns(), window).from
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(times: &[i64]) -> Vec<Column> {
        times.iter().map(|time| Column::new(*time, 0)).collect()
    }

    #[test]
    fn brackets_range_between_samples() {
        let columns = columns(&[0, 100, 200, 300, 400]);
        let range = map_time_range_to_indexes(&columns, TimeRange::new(150, 250));
        assert_eq!(range, IndexRange::new(1, 3));
    }

    #[test]
    fn exact_sample_times_are_inclusive() {
        let columns = columns(&[0, 100, 200, 300, 400]);
        let range = map_time_range_to_indexes(&columns, TimeRange::new(100, 300));
        assert_eq!(range, IndexRange::new(1, 3));
    }

    #[test]
    fn out_of_span_ranges_clamp_to_edges() {
        let columns = columns(&[0, 100, 200, 300]);
        assert_eq!(
            map_time_range_to_indexes(&columns, TimeRange::new(-500, 10_000)),
            IndexRange::new(0, 3)
        );
        assert_eq!(
            map_time_range_to_indexes(&columns, TimeRange::new(5_000, 6_000)),
            IndexRange::new(3, 3)
        );
    }
}
