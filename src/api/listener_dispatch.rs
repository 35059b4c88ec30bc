use crate::extensions::{ChartEvent, ListenerContext};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn listener_context(&self) -> ListenerContext {
        ListenerContext {
            scope: self.main.scope(),
            visible_indexes: self.main.visible_indexes(),
            axis_ceiling: self.main.committed_blend().ceiling(),
            visible_series: self.main.visibility().visible_count(),
            selected_x: self.selection.state().map(|state| state.normalized_x),
        }
    }

    pub(super) fn emit(&mut self, event: ChartEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let context = self.listener_context();
        for listener in &mut self.listeners {
            listener.on_event(event, context);
        }
    }
}
