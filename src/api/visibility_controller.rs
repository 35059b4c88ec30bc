use tracing::debug;

use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Hides or shows one series on both the main chart and the history strip.
    ///
    /// Levels are replanned right away; the fade and the axis transition run
    /// over the configured animation duration.
    pub fn set_series_hidden(&mut self, index: usize, hidden: bool) -> ChartResult<()> {
        let seconds = self.config.animation_duration_seconds;
        let (transition, update) = self.main.set_hidden(index, hidden, seconds)?;
        if transition.is_noop() {
            return Ok(());
        }
        self.history.set_hidden(index, hidden, seconds)?;
        debug!(
            series_index = index,
            hidden,
            visible = self.main.visibility().visible_count(),
            "series visibility changed"
        );

        self.emit(ChartEvent::VisibilityChanged {
            series_index: index,
            hidden,
        });
        self.emit_levels_recomputed(update);
        Ok(())
    }

    /// Flips one series and returns its new hidden flag.
    pub fn toggle_series(&mut self, index: usize) -> ChartResult<bool> {
        let hidden = !self.main.visibility().is_hidden(index);
        self.set_series_hidden(index, hidden)?;
        Ok(hidden)
    }
}
