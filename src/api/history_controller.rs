use tracing::debug;

use crate::core::Scope;
use crate::extensions::ChartEvent;
use crate::interaction::GestureInput;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Feeds one history strip gesture sample.
    ///
    /// `input.x` is normalized to the strip width. Returns the applied scope
    /// when the range window moved.
    pub fn handle_history_gesture(&mut self, input: GestureInput) -> Option<Scope> {
        let track_width_px = f64::from(self.config.history_viewport.width);
        let scope = self.range_selector.handle_gesture(input, track_width_px)?;
        self.apply_scope(scope);
        Some(scope)
    }

    pub(super) fn apply_scope(&mut self, scope: Scope) {
        if scope == self.main.scope() {
            return;
        }
        let update = self
            .main
            .set_scope(scope, self.config.animation_duration_seconds);
        debug!(
            from = scope.from(),
            to = scope.to(),
            levels_recomputed = update.levels_recomputed,
            level_animation = update.level_animation_started,
            "scope changed"
        );
        self.emit(ChartEvent::ScopeChanged {
            from: scope.from(),
            to: scope.to(),
        });
        self.emit_levels_recomputed(update);
    }
}
