use serde::{Deserialize, Serialize};

use crate::core::{IndexRange, Scope};

/// Read-only state snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListenerContext {
    pub scope: Scope,
    pub visible_indexes: Option<IndexRange>,
    pub axis_ceiling: f64,
    pub visible_series: usize,
    pub selected_x: Option<f64>,
}

/// Event stream exposed to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    ScopeChanged { from: f64, to: f64 },
    LevelsRecomputed { levels: usize, window: usize },
    VisibilityChanged { series_index: usize, hidden: bool },
    SelectionChanged { normalized_x: Option<f64> },
    Rendered,
}

/// Observer registered on a chart engine.
///
/// Listeners observe events and read engine context; they never hold or mutate
/// engine state.
pub trait ChartListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: ListenerContext);
}
