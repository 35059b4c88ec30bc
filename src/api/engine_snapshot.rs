use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{IndexRange, Level, LevelBlend, Scope};
use crate::error::ChartResult;
use crate::interaction::{DragMode, SelectionState};
use crate::render::Renderer;

use super::ChartEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub scope: Scope,
    pub range_window: (f64, f64),
    pub drag_mode: DragMode,
    pub visible_indexes: Option<IndexRange>,
    pub levels: Vec<Level>,
    pub axis_blend: LevelBlend,
    pub history_blend: LevelBlend,
    pub selection: Option<SelectionState>,
    /// Hidden flag per series, keyed by series name in series order.
    pub series_hidden: IndexMap<String, bool>,
    pub date_ticks: Vec<i64>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let visibility = self.main.visibility();
        let series_hidden = self
            .main
            .series()
            .iter()
            .enumerate()
            .map(|(index, series)| (series.name().to_owned(), visibility.is_hidden(index)))
            .collect();

        EngineSnapshot {
            scope: self.main.scope(),
            range_window: (self.range_selector.from(), self.range_selector.to()),
            drag_mode: self.range_selector.mode(),
            visible_indexes: self.main.visible_indexes(),
            levels: self.main.levels().to_vec(),
            axis_blend: self.main.committed_blend(),
            history_blend: self.history.committed_blend(),
            selection: self.selection.state(),
            series_hidden,
            date_ticks: self.main.date_ticks().to_vec(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_pretty()
    }
}
