//! Value-axis auto-scaling.
//!
//! The full series is split into blocks one visible window wide. Each block
//! contributes a "nice" axis ceiling (a [`Level`]) pinned to the column where
//! its peak sits. While the user pans, the axis ceiling is blended between the
//! two levels bracketing the visible index range, so the scale slides
//! continuously instead of jumping between blocks.

#[cfg(feature = "parallel-peaks")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{IndexRange, SCOPE_PRECISION, Scope, Series, VisibilityVector};

/// Headroom applied on top of the rounded peak so the tallest line never
/// touches the frame edge.
pub const LEVEL_HEADROOM: f64 = 1.1;

/// Axis ceiling candidate pinned to a column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub value: i64,
    pub index: usize,
}

impl Level {
    #[must_use]
    pub const fn new(value: i64, index: usize) -> Self {
        Self { value, index }
    }
}

/// Interpolation state between two bracketing levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelBlend {
    pub from: f64,
    pub to: f64,
    pub ratio: f64,
}

impl LevelBlend {
    #[must_use]
    pub const fn new(from: f64, to: f64, ratio: f64) -> Self {
        Self { from, to, ratio }
    }

    /// Blend pinned to a single level.
    #[must_use]
    pub const fn single(value: f64) -> Self {
        Self::new(value, value, 0.0)
    }

    /// Axis maximum currently in effect.
    #[must_use]
    pub fn ceiling(self) -> f64 {
        self.from + (self.to - self.from) * self.ratio
    }

    /// The level that carries most of the weight.
    #[must_use]
    pub fn dominant(self) -> f64 {
        if self.ratio > 0.5 { self.to } else { self.from }
    }
}

/// Pair of levels bracketing a visible index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPair {
    pub from: Level,
    pub to: Level,
}

/// Per-column maximum across visible series, floored at zero.
///
/// Returns an empty vector when no series is visible.
#[must_use]
pub fn compute_peaks(series: &[Series], visibility: &VisibilityVector) -> Vec<i64> {
    let visible: Vec<&Series> = series
        .iter()
        .enumerate()
        .filter(|(index, _)| visibility.is_visible(*index))
        .map(|(_, series)| series)
        .collect();
    let Some(first) = visible.first() else {
        return Vec::new();
    };
    let len = visible
        .iter()
        .map(|series| series.len())
        .min()
        .unwrap_or(first.len());

    let peak_at = |index: usize| {
        visible
            .iter()
            .map(|series| series.columns()[index].value)
            .fold(0, i64::max)
    };

    #[cfg(feature = "parallel-peaks")]
    {
        (0..len).into_par_iter().map(peak_at).collect()
    }

    #[cfg(not(feature = "parallel-peaks"))]
    {
        (0..len).map(peak_at).collect()
    }
}

/// Number of columns covered by one visible window of `scope.length()`.
///
/// Never returns less than one so block stepping always advances.
#[must_use]
pub fn visible_indexes_count(series: &Series, scope: Scope) -> usize {
    let visible_length = (series.span() as f64 * scope.length()) as i64;
    let visible_time = series.first_time() + visible_length;
    series
        .columns()
        .iter()
        .position(|column| column.time >= visible_time)
        .unwrap_or(0)
        .max(1)
}

/// Rounds a peak up to a readable axis ceiling for `level_count` grid steps.
///
/// `part = ceil(peak / level_count)` keeps only its two most significant
/// digits, then the ceiling gets [`LEVEL_HEADROOM`].
#[must_use]
pub fn calculate_level(peak: i64, level_count: usize) -> i64 {
    if level_count == 0 {
        return peak;
    }
    let count = level_count as i64;
    let part = ceil_div(peak, count);
    let digits = part.unsigned_abs().to_string().len();
    let level = if digits > 2 {
        let decimals = 10_i64.pow((digits - 2) as u32);
        (part / decimals) * count * decimals
    } else {
        part * count
    };
    (level as f64 * LEVEL_HEADROOM).round() as i64
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    let quotient = value / divisor;
    if value % divisor > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Samples one level per window-sized block of `peaks`.
///
/// The first block pins to index `0`, the last to the final index and every
/// interior block to its own peak column. A single block yields both the
/// head and the tail level.
#[must_use]
pub fn plan_levels(peaks: &[i64], window: usize, level_count: usize) -> Vec<Level> {
    if peaks.len() < 2 {
        return Vec::new();
    }
    let window = window.max(1);
    let last_index = peaks.len() - 1;
    let block_starts: Vec<usize> = (0..last_index).step_by(window).collect();
    let (Some(&first_start), Some(&last_start)) = (block_starts.first(), block_starts.last())
    else {
        return Vec::new();
    };

    let mut levels = Vec::with_capacity(block_starts.len() + 1);
    for start in block_starts {
        let end = (start + window).min(peaks.len());
        let mut local_peak = 0;
        let mut local_peak_index = start;
        for (index, peak) in peaks.iter().enumerate().take(end).skip(start) {
            if *peak > local_peak {
                local_peak = *peak;
                local_peak_index = index;
            }
        }

        let value = calculate_level(local_peak, level_count);
        if start == first_start {
            levels.push(Level::new(value, 0));
        }
        if start == last_start {
            levels.push(Level::new(value, last_index));
        }
        if start != first_start && start != last_start {
            levels.push(Level::new(value, local_peak_index));
        }
    }
    levels
}

/// Collapses runs of equal levels.
///
/// The first and last breakpoints always survive, and the two trailing
/// breakpoints never share a value unless only the head/tail pair is left.
#[must_use]
pub fn dedup_levels(levels: Vec<Level>) -> Vec<Level> {
    if levels.len() <= 2 {
        return levels;
    }
    let head = levels[0];
    let tail = levels[levels.len() - 1];

    let mut unique = vec![head];
    for level in &levels[1..levels.len() - 1] {
        if unique.last().is_some_and(|previous| previous.value != level.value) {
            unique.push(*level);
        }
    }
    if unique.len() > 1 && unique.last().is_some_and(|previous| previous.value == tail.value) {
        unique.pop();
    }
    unique.push(tail);
    unique
}

/// Finds the levels bracketing `indexes`.
///
/// `from` is the last level left of the range, or the first level inside it
/// when that one starts before `indexes.to`. `to` mirrors it from the right.
#[must_use]
pub fn target_levels(levels: &[Level], indexes: IndexRange) -> Option<LevelPair> {
    let mut from = None;
    for level in levels {
        if indexes.from <= level.index {
            if level.index < indexes.to {
                from = Some(*level);
            }
            break;
        }
        from = Some(*level);
    }

    let mut to = None;
    for level in levels.iter().rev() {
        if level.index <= indexes.to {
            if level.index > indexes.from {
                to = Some(*level);
            }
            break;
        }
        to = Some(*level);
    }

    Some(LevelPair {
        from: from?,
        to: to?,
    })
}

/// Weight of `pair.to` for the visible `indexes`.
#[must_use]
pub fn blend_ratio(pair: LevelPair, indexes: IndexRange) -> f64 {
    let from_inside = indexes.contains(pair.from.index);
    let to_inside = indexes.contains(pair.to.index);

    if from_inside && to_inside {
        if pair.from.value > pair.to.value {
            0.0
        } else {
            1.0
        }
    } else if from_inside {
        0.0
    } else if pair.from.index < indexes.from && pair.to.index > indexes.to {
        let left = (indexes.from - pair.from.index) as f64;
        let right = (pair.to.index - indexes.to) as f64;
        left / (left + right)
    } else {
        1.0
    }
}

/// Blend for `indexes`, or `None` when no bracketing pair exists.
#[must_use]
pub fn blend_levels(levels: &[Level], indexes: IndexRange) -> Option<LevelBlend> {
    let pair = target_levels(levels, indexes)?;
    let ratio = blend_ratio(pair, indexes);
    Some(LevelBlend::new(
        pair.from.value as f64,
        pair.to.value as f64,
        ratio,
    ))
}

/// In-flight endpoints for animating from `old` to `new`.
///
/// Both endpoints share the dominant level of each blend; only the ratio moves,
/// from wherever `old` already was (if still closer to its own level) to `1`.
#[must_use]
pub fn level_transition(old: LevelBlend, new: LevelBlend) -> (LevelBlend, LevelBlend) {
    let old_level = old.dominant();
    let new_level = new.dominant();
    let start_ratio = if old.ratio < 0.5 { old.ratio } else { 0.0 };
    (
        LevelBlend::new(old_level, new_level, start_ratio),
        LevelBlend::new(old_level, new_level, 1.0),
    )
}

/// Cached peaks and breakpoint levels for one chart view.
///
/// Peaks follow the visibility set; levels follow the scope length. Pure pans
/// reuse both and only re-blend.
#[derive(Debug, Clone, Default)]
pub struct LevelPlanner {
    level_count: usize,
    peaks: Vec<i64>,
    levels: Vec<Level>,
    planned_length: Option<f64>,
    window: usize,
}

impl LevelPlanner {
    #[must_use]
    pub fn new(level_count: usize) -> Self {
        Self {
            level_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        self.level_count
    }

    #[must_use]
    pub fn peaks(&self) -> &[i64] {
        &self.peaks
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Window size (in columns) used for the current levels.
    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Recomputes peaks for a new visibility set and forces a level replan.
    pub fn update_peaks(&mut self, series: &[Series], visibility: &VisibilityVector) {
        self.peaks = compute_peaks(series, visibility);
        self.planned_length = None;
        trace!(
            peaks = self.peaks.len(),
            visible = visibility.visible_count(),
            "recomputed level peaks"
        );
    }

    /// Forces the next [`Self::ensure_levels`] call to replan, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.planned_length = None;
    }

    /// Scope lengths are compared at half the scope rounding unit, so pans
    /// never replan on float noise.
    #[must_use]
    pub fn needs_replan(&self, scope: Scope) -> bool {
        self.planned_length
            .is_none_or(|length| (length - scope.length()).abs() >= SCOPE_PRECISION / 2.0)
    }

    /// Replans levels when the scope length changed. Returns `true` on replan.
    pub fn ensure_levels(&mut self, reference: Option<&Series>, scope: Scope) -> bool {
        if !self.needs_replan(scope) {
            return false;
        }
        self.planned_length = Some(scope.length());

        let Some(series) = reference else {
            self.levels.clear();
            self.window = 0;
            return true;
        };
        self.window = visible_indexes_count(series, scope);
        self.levels = dedup_levels(plan_levels(&self.peaks, self.window, self.level_count));
        trace!(
            window = self.window,
            levels = self.levels.len(),
            length = scope.length(),
            "replanned axis levels"
        );
        true
    }

    #[must_use]
    pub fn blend(&self, indexes: IndexRange) -> Option<LevelBlend> {
        blend_levels(&self.levels, indexes)
    }

    /// Single-level fallback: the breakpoint closest to the middle of `indexes`.
    #[must_use]
    pub fn nearest_level(&self, indexes: IndexRange) -> Option<Level> {
        let middle = (indexes.from + indexes.to) / 2;
        self.levels
            .iter()
            .copied()
            .min_by_key(|level| level.index.abs_diff(middle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_div_rounds_up_positive_remainders() {
        assert_eq!(ceil_div(50, 5), 10);
        assert_eq!(ceil_div(51, 5), 11);
        assert_eq!(ceil_div(0, 5), 0);
    }

    #[test]
    fn calculate_level_keeps_two_significant_digits() {
        // part = ceil(12_345 / 5) = 2_469 -> 24 * 100 -> 2_400 * 5 * 1.1
        assert_eq!(calculate_level(12_345, 5), 13_200);
        assert_eq!(calculate_level(50, 5), 55);
        assert_eq!(calculate_level(77, 0), 77);
    }

    #[test]
    fn dominant_picks_heavier_side() {
        assert_eq!(LevelBlend::new(10.0, 20.0, 0.2).dominant(), 10.0);
        assert_eq!(LevelBlend::new(10.0, 20.0, 0.8).dominant(), 20.0);
    }
}
