use serde::{Deserialize, Serialize};

use crate::core::{VISIBLE_OPACITY_THRESHOLD, nearest_column_index};
use crate::extensions::ChartEvent;
use crate::interaction::SelectionChange;
use crate::render::Renderer;

use super::ChartEngine;

/// One series value at the selected column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedValue {
    pub series_index: usize,
    pub name: String,
    pub color_hex: String,
    pub value: i64,
}

/// Column resolved from the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedPoint {
    pub index: usize,
    pub time: i64,
    /// Values of series currently drawn, in series order.
    pub values: Vec<SelectedValue>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Handles a tap on the main chart at `x`, normalized to its width.
    pub fn tap(&mut self, x: f64) -> SelectionChange {
        let change = self.selection.on_tap(x, self.main.scope());
        let normalized_x = match change {
            SelectionChange::Selected(state) => Some(state.normalized_x),
            SelectionChange::Cleared => None,
        };
        self.emit(ChartEvent::SelectionChanged { normalized_x });
        change
    }

    pub fn clear_selection(&mut self) {
        if self.selection.state().is_none() {
            return;
        }
        self.selection.clear();
        self.emit(ChartEvent::SelectionChanged { normalized_x: None });
    }

    /// Resolves the selection to the nearest column and the values of every
    /// series still drawn there.
    #[must_use]
    pub fn selected_point(&self) -> Option<SelectedPoint> {
        let state = self.selection.state()?;
        let primary = self.main.primary()?;
        let time_range = self.main.time_range()?;
        let scope = self.main.scope();

        let offset = (primary.span() as f64 * (state.normalized_x - scope.from())) as i64;
        let index = nearest_column_index(primary, time_range.from + offset);
        let time = primary.columns().get(index)?.time;

        let opacities = self.main.presented_opacities();
        let values = self
            .main
            .series()
            .iter()
            .enumerate()
            .filter(|(series_index, _)| {
                opacities
                    .get(*series_index)
                    .is_some_and(|opacity| *opacity >= VISIBLE_OPACITY_THRESHOLD)
            })
            .filter_map(|(series_index, series)| {
                let column = series.columns().get(index)?;
                Some(SelectedValue {
                    series_index,
                    name: series.name().to_owned(),
                    color_hex: series.color_hex().to_owned(),
                    value: column.value,
                })
            })
            .collect();

        Some(SelectedPoint {
            index,
            time,
            values,
        })
    }
}
