pub mod range_selector;
pub mod selection;

use serde::{Deserialize, Serialize};

pub use range_selector::{
    DEFAULT_HANDLE_WIDTH_PX, DEFAULT_MIN_WINDOW_WIDTH, DragMode, RangeSelector,
    RangeSelectorConfig,
};
pub use selection::{DEFAULT_SELECTION_TOLERANCE, SelectionChange, SelectionModel, SelectionState};

/// Lifecycle phase of a single-pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Begin,
    Move,
    End,
    Cancel,
}

/// One pointer sample with its horizontal position normalized to `[0, 1]`
/// of the receiving widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureInput {
    pub phase: GesturePhase,
    pub x: f64,
}

impl GestureInput {
    #[must_use]
    pub const fn new(phase: GesturePhase, x: f64) -> Self {
        Self { phase, x }
    }

    #[must_use]
    pub const fn begin(x: f64) -> Self {
        Self::new(GesturePhase::Begin, x)
    }

    #[must_use]
    pub const fn moved(x: f64) -> Self {
        Self::new(GesturePhase::Move, x)
    }

    #[must_use]
    pub const fn end(x: f64) -> Self {
        Self::new(GesturePhase::End, x)
    }

    #[must_use]
    pub const fn cancel(x: f64) -> Self {
        Self::new(GesturePhase::Cancel, x)
    }
}
