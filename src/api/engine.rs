use tracing::debug;

use crate::core::{
    IndexRange, Level, LevelBlend, Scope, Series, TimeRange, Viewport, VisibilityVector,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartEvent, ChartListener};
use crate::interaction::{RangeSelector, SelectionModel, SelectionState};
use crate::render::Renderer;

use super::chart_view::{ChartView, ChartViewOptions, ViewUpdate};
use super::{
    ChartEngineConfig, ChartTheme, ColorScheme, history_frame_builder, render_frame_builder,
};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns one chart widget: the main chart view, the history strip
/// view with its range selector, the point selection, registered listeners and
/// the renderer both surfaces are drawn into.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) theme: ChartTheme,
    pub(super) main: ChartView,
    pub(super) history: ChartView,
    pub(super) range_selector: RangeSelector,
    pub(super) selection: SelectionModel,
    pub(super) listeners: Vec<Box<dyn ChartListener>>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds an engine over `series`, which must share the same sample times.
    pub fn new(renderer: R, config: ChartEngineConfig, series: Vec<Series>) -> ChartResult<Self> {
        let config = config.validate()?;
        let Some(first) = series.first() else {
            return Err(ChartError::InvalidData(
                "chart needs at least one series".to_owned(),
            ));
        };
        if let Some(mismatch) = series.iter().find(|entry| entry.len() != first.len()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` has {} samples, expected {}",
                mismatch.name(),
                mismatch.len(),
                first.len()
            )));
        }

        let range_selector = RangeSelector::with_scope(config.range_selector, config.initial_scope);
        let main = ChartView::new(
            series.clone(),
            range_selector.scope(),
            ChartViewOptions {
                level_count: config.level_count,
                show_dates: config.show_dates,
                visible_dates: config.visible_dates,
            },
        );
        let history = ChartView::new(
            series,
            Scope::FULL,
            ChartViewOptions {
                level_count: 0,
                show_dates: false,
                visible_dates: 0,
            },
        );
        debug!(
            series = main.series().len(),
            samples = main.primary().map_or(0, Series::len),
            from = range_selector.from(),
            to = range_selector.to(),
            "chart engine created"
        );

        Ok(Self {
            renderer,
            theme: ChartTheme::for_scheme(config.color_scheme),
            config,
            main,
            history,
            range_selector,
            selection: SelectionModel::new(config.selection_tolerance),
            listeners: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> ChartTheme {
        self.theme
    }

    /// Replaces the palette; hosts may pass any custom theme.
    pub fn set_theme(&mut self, theme: ChartTheme) {
        self.theme = theme;
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.config.color_scheme = scheme;
        self.theme = ChartTheme::for_scheme(scheme);
        debug!(?scheme, "color scheme changed");
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        self.main.series()
    }

    #[must_use]
    pub fn scope(&self) -> Scope {
        self.main.scope()
    }

    #[must_use]
    pub fn range_selector(&self) -> &RangeSelector {
        &self.range_selector
    }

    #[must_use]
    pub fn visibility(&self) -> &VisibilityVector {
        self.main.visibility()
    }

    /// Current breakpoint levels of the main chart.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        self.main.levels()
    }

    /// Axis blend the main chart settles on once animations finish.
    #[must_use]
    pub fn axis_blend(&self) -> LevelBlend {
        self.main.committed_blend()
    }

    /// Axis blend as drawn right now, including any in-flight transition.
    #[must_use]
    pub fn presented_axis_blend(&self) -> LevelBlend {
        self.main.presented_blend()
    }

    #[must_use]
    pub fn history_blend(&self) -> LevelBlend {
        self.history.presented_blend()
    }

    /// Per-series opacity as drawn right now.
    #[must_use]
    pub fn series_opacities(&self) -> Vec<f64> {
        self.main.presented_opacities()
    }

    #[must_use]
    pub fn date_ticks(&self) -> &[i64] {
        self.main.date_ticks()
    }

    #[must_use]
    pub fn visible_indexes(&self) -> Option<IndexRange> {
        self.main.visible_indexes()
    }

    #[must_use]
    pub fn visible_time_range(&self) -> Option<TimeRange> {
        self.main.time_range()
    }

    #[must_use]
    pub fn selection(&self) -> Option<SelectionState> {
        self.selection.state()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.main.is_animating() || self.history.is_animating()
    }

    /// Moves the range window programmatically, widened to the minimum width
    /// when needed. Returns the scope actually applied.
    pub fn set_scope(&mut self, scope: Scope) -> Scope {
        self.range_selector = RangeSelector::with_scope(self.range_selector.config(), scope);
        let applied = self.range_selector.scope();
        self.apply_scope(applied);
        applied
    }

    pub fn set_main_viewport(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }
        self.config.main_viewport = viewport;
        let update = self.main.invalidate_levels();
        self.emit_levels_recomputed(update);
        Ok(())
    }

    pub fn set_history_viewport(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }
        self.config.history_viewport = viewport;
        self.history.invalidate_levels();
        Ok(())
    }

    /// Steps every running animation by `delta_seconds`.
    ///
    /// Returns `true` while any animation is still running, so hosts know to
    /// keep requesting frames.
    pub fn advance_animations(&mut self, delta_seconds: f64) -> bool {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            return self.is_animating();
        }
        let main_running = self.main.advance_animations(delta_seconds);
        let history_running = self.history.advance_animations(delta_seconds);
        main_running || history_running
    }

    /// Builds and draws the main chart frame, then the history strip frame.
    pub fn render(&mut self) -> ChartResult<()> {
        let main_frame = render_frame_builder::build_main_frame(self);
        let history_frame = history_frame_builder::build_history_frame(self);
        self.renderer.render(&main_frame)?;
        self.renderer.render(&history_frame)?;
        self.emit(ChartEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn emit_levels_recomputed(&mut self, update: ViewUpdate) {
        if update.levels_recomputed {
            let event = ChartEvent::LevelsRecomputed {
                levels: self.main.levels().len(),
                window: self.main.planner_window(),
            };
            self.emit(event);
        }
    }
}
