use tracing::{debug, warn};

use crate::animation::Animatable;
use crate::core::{
    IndexRange, Level, LevelBlend, LevelPlanner, Scope, Series, TimeRange, VisibilityTransition,
    VisibilityVector, level_transition, plan_date_ticks, time_range_for_scope, visible_indexes,
};
use crate::error::ChartResult;

/// Ratio at which a zoom is considered to have snapped onto the next level.
const LEVEL_SNAP_RATIO: f64 = 0.999;

/// Options fixed for the lifetime of one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ChartViewOptions {
    pub(super) level_count: usize,
    pub(super) show_dates: bool,
    pub(super) visible_dates: usize,
}

/// What a state change did to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct ViewUpdate {
    pub(super) levels_recomputed: bool,
    pub(super) level_animation_started: bool,
}

/// State of one chart surface: its own series copies, visibility, scope,
/// level cache and animations.
///
/// The main chart and the history strip each own one, so toggling or zooming
/// one never aliases the other's state.
#[derive(Debug, Clone)]
pub(super) struct ChartView {
    series: Vec<Series>,
    visibility: VisibilityVector,
    scope: Scope,
    options: ChartViewOptions,
    planner: LevelPlanner,
    blend: Animatable<LevelBlend>,
    opacity: Animatable<Vec<f64>>,
    date_ticks: Vec<i64>,
}

impl ChartView {
    pub(super) fn new(series: Vec<Series>, scope: Scope, options: ChartViewOptions) -> Self {
        let visibility = VisibilityVector::all_visible(series.len());
        let mut planner = LevelPlanner::new(options.level_count);
        planner.update_peaks(&series, &visibility);
        let opacity = Animatable::new(visibility.opacities());

        let mut view = Self {
            series,
            visibility,
            scope,
            options,
            planner,
            blend: Animatable::new(LevelBlend::single(0.0)),
            opacity,
            date_ticks: Vec::new(),
        };
        view.refresh(false, 0.0);
        view
    }

    pub(super) fn series(&self) -> &[Series] {
        &self.series
    }

    /// Series that drives time mapping; all series share its sample times.
    pub(super) fn primary(&self) -> Option<&Series> {
        self.series.first()
    }

    pub(super) fn visibility(&self) -> &VisibilityVector {
        &self.visibility
    }

    pub(super) fn scope(&self) -> Scope {
        self.scope
    }

    pub(super) fn levels(&self) -> &[Level] {
        self.planner.levels()
    }

    pub(super) fn level_count(&self) -> usize {
        self.options.level_count
    }

    pub(super) fn planner_window(&self) -> usize {
        self.planner.window()
    }

    pub(super) fn date_ticks(&self) -> &[i64] {
        &self.date_ticks
    }

    pub(super) fn committed_blend(&self) -> LevelBlend {
        *self.blend.committed()
    }

    pub(super) fn presented_blend(&self) -> LevelBlend {
        self.blend.presentation()
    }

    pub(super) fn presented_opacities(&self) -> Vec<f64> {
        self.opacity.presentation()
    }

    pub(super) fn is_animating(&self) -> bool {
        self.blend.is_animating() || self.opacity.is_animating()
    }

    pub(super) fn time_range(&self) -> Option<TimeRange> {
        self.primary()
            .map(|series| time_range_for_scope(series, self.scope))
    }

    pub(super) fn visible_indexes(&self) -> Option<IndexRange> {
        self.primary().map(|series| visible_indexes(series, self.scope))
    }

    pub(super) fn set_scope(&mut self, scope: Scope, animation_seconds: f64) -> ViewUpdate {
        self.scope = scope;
        self.refresh(false, animation_seconds)
    }

    /// Hides or shows one series, replans levels from the new visible set and
    /// starts the opacity fade plus a level transition.
    ///
    /// The fade starts from the opacities currently drawn, so toggling again
    /// mid-fade reverses smoothly. Setting the current state changes nothing.
    pub(super) fn set_hidden(
        &mut self,
        index: usize,
        hidden: bool,
        animation_seconds: f64,
    ) -> ChartResult<(VisibilityTransition, ViewUpdate)> {
        let transition = self.visibility.set_hidden(index, hidden)?;
        if transition.is_noop() {
            return Ok((transition, ViewUpdate::default()));
        }
        self.planner.update_peaks(&self.series, &self.visibility);
        let update = self.refresh(true, animation_seconds);
        self.opacity.animate_to(transition.to.clone(), animation_seconds);
        Ok((transition, update))
    }

    /// Forces a level replan on the next refresh, e.g. after a resize.
    pub(super) fn invalidate_levels(&mut self) -> ViewUpdate {
        self.planner.invalidate();
        self.refresh(false, 0.0)
    }

    pub(super) fn advance_animations(&mut self, delta_seconds: f64) -> bool {
        let blend_running = self.blend.advance(delta_seconds);
        let opacity_running = self.opacity.advance(delta_seconds);
        blend_running || opacity_running
    }

    fn refresh(&mut self, animate: bool, animation_seconds: f64) -> ViewUpdate {
        let reference = self
            .visibility
            .first_visible()
            .and_then(|index| self.series.get(index));
        let levels_recomputed = self.planner.ensure_levels(reference, self.scope);
        if levels_recomputed && self.options.show_dates {
            self.date_ticks = self
                .primary()
                .map(|series| plan_date_ticks(series, self.scope, self.options.visible_dates))
                .unwrap_or_default();
        }

        let mut update = ViewUpdate {
            levels_recomputed,
            level_animation_started: false,
        };
        let Some(indexes) = self.visible_indexes() else {
            return update;
        };
        let Some(next) = self.resolve_blend(indexes) else {
            warn!(
                from = indexes.from,
                to = indexes.to,
                "no axis levels available, keeping previous scale"
            );
            return update;
        };

        let previous = *self.blend.committed();
        let snapped = levels_recomputed
            && previous.ratio < LEVEL_SNAP_RATIO
            && next.ratio >= LEVEL_SNAP_RATIO
            && next.from != next.to;
        if (animate || snapped) && animation_seconds > 0.0 {
            let (from, to) = level_transition(previous, next);
            self.blend.animate(from, to, next, animation_seconds);
            update.level_animation_started = true;
        } else {
            self.blend.set(next);
        }
        update
    }

    fn resolve_blend(&self, indexes: IndexRange) -> Option<LevelBlend> {
        if let Some(blend) = self.planner.blend(indexes) {
            return Some(blend);
        }
        let level = self.planner.nearest_level(indexes)?;
        debug!(
            from = indexes.from,
            to = indexes.to,
            level = level.value,
            "no bracketing axis levels, falling back to nearest breakpoint"
        );
        Some(LevelBlend::single(level.value as f64))
    }
}
