use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Scope;

/// Default re-tap distance (normalized widget units) that clears a selection.
pub const DEFAULT_SELECTION_TOLERANCE: f64 = 0.05;

/// Highlighted point of the main chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Widget-relative tap position in `[0, 1]`, used for re-tap hysteresis.
    pub tap_x: f64,
    /// Position in the normalized space of the full series.
    pub normalized_x: f64,
}

/// Outcome of one tap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionChange {
    Selected(SelectionState),
    Cleared,
}

/// Tap-to-toggle selection with hysteresis around the previous tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionModel {
    tolerance: f64,
    state: Option<SelectionState>,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTION_TOLERANCE)
    }
}

impl SelectionModel {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            state: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> Option<SelectionState> {
        self.state
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Selects a new point, or clears the current one when `tap_x` lands within
    /// the tolerance of the previous tap.
    pub fn on_tap(&mut self, tap_x: f64, scope: Scope) -> SelectionChange {
        let replaces = self
            .state
            .is_none_or(|previous| (tap_x - previous.tap_x).abs() > self.tolerance);

        if replaces {
            let state = SelectionState {
                tap_x,
                normalized_x: scope.absolute_position(tap_x),
            };
            debug!(tap_x, normalized_x = state.normalized_x, "select point");
            self.state = Some(state);
            SelectionChange::Selected(state)
        } else {
            debug!(tap_x, "clear selected point");
            self.state = None;
            SelectionChange::Cleared
        }
    }

    pub fn clear(&mut self) {
        self.state = None;
    }
}
