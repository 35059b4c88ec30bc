use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::Scope;
use crate::error::{ChartError, ChartResult};

use super::{GestureInput, GesturePhase};

/// Smallest allowed window width in normalized units.
pub const DEFAULT_MIN_WINDOW_WIDTH: f64 = 0.3;
/// Width of each drag handle in pixels.
pub const DEFAULT_HANDLE_WIDTH_PX: f64 = 16.0;

/// Drag mode held for the duration of one pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum DragMode {
    #[default]
    Idle,
    DraggingLeftHandle,
    DraggingRightHandle,
    /// Moving the whole window; `offset` is window middle minus grab position.
    DraggingWindow {
        offset: f64,
    },
    /// Gesture started outside the window and is ignored until it ends.
    Ignoring,
}

/// Tuning for the history strip range selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelectorConfig {
    pub min_width: f64,
    pub handle_width_px: f64,
}

impl Default for RangeSelectorConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WINDOW_WIDTH,
            handle_width_px: DEFAULT_HANDLE_WIDTH_PX,
        }
    }
}

impl RangeSelectorConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.min_width.is_finite() || self.min_width <= 0.0 || self.min_width > 1.0 {
            return Err(ChartError::InvalidData(
                "range selector min width must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.handle_width_px.is_finite() || self.handle_width_px < 0.0 {
            return Err(ChartError::InvalidData(
                "range selector handle width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Selected window of the history strip and its drag state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSelector {
    config: RangeSelectorConfig,
    from: f64,
    to: f64,
    mode: DragMode,
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::new(RangeSelectorConfig::default())
    }
}

impl RangeSelector {
    /// Starts with the rightmost `min_width` window selected.
    #[must_use]
    pub fn new(config: RangeSelectorConfig) -> Self {
        Self {
            config,
            from: 1.0 - config.min_width,
            to: 1.0,
            mode: DragMode::Idle,
        }
    }

    /// Starts with `scope` selected, widened to `min_width` if needed.
    #[must_use]
    pub fn with_scope(config: RangeSelectorConfig, scope: Scope) -> Self {
        let mut selector = Self::new(config);
        let from = scope.from().min(1.0 - config.min_width).max(0.0);
        let to = scope.to().max(from + config.min_width).min(1.0);
        selector.from = from;
        selector.to = to;
        selector
    }

    #[must_use]
    pub fn config(&self) -> RangeSelectorConfig {
        self.config
    }

    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn scope(&self) -> Scope {
        Scope::new(self.from, self.to)
    }

    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Moves the left edge, keeping at least `min_width` to the right edge.
    pub fn change_from(&mut self, from: f64) -> Scope {
        if self.to - from < self.config.min_width {
            self.from = self.to - self.config.min_width;
        } else {
            self.from = from.max(0.0);
        }
        self.scope()
    }

    /// Moves the right edge, keeping at least `min_width` to the left edge.
    pub fn change_to(&mut self, to: f64) -> Scope {
        if to - self.from < self.config.min_width {
            self.to = self.from + self.config.min_width;
        } else {
            self.to = to.min(1.0);
        }
        self.scope()
    }

    /// Moves the whole window to `(from, to)`, shifting it back inside `[0, 1]`.
    ///
    /// The current width is kept; only the position changes.
    pub fn change_window(&mut self, from: f64, to: f64) -> Scope {
        let width = self.to - self.from;
        if to >= 1.0 {
            self.to = 1.0;
            self.from = 1.0 - width;
        } else if from < 0.0 {
            self.from = 0.0;
            self.to = width;
        } else {
            self.from = from;
            self.to = to;
        }
        self.scope()
    }

    /// Feeds one gesture sample. Returns the new scope when the window moved.
    ///
    /// `track_width_px` is the strip width used to size the handle catch zones.
    pub fn handle_gesture(&mut self, input: GestureInput, track_width_px: f64) -> Option<Scope> {
        match input.phase {
            GesturePhase::Begin => {
                self.mode = self.classify(input.x, track_width_px);
                debug!(x = input.x, mode = ?self.mode, "range selector gesture began");
            }
            GesturePhase::Move => {}
            GesturePhase::End | GesturePhase::Cancel => {
                trace!(phase = ?input.phase, "range selector gesture finished");
                self.mode = DragMode::Idle;
                return None;
            }
        }
        self.apply_drag(input.x)
    }

    fn classify(&self, x: f64, track_width_px: f64) -> DragMode {
        let catch = if track_width_px > 0.0 {
            self.config.handle_width_px / track_width_px
        } else {
            0.0
        };

        if x >= self.from - catch / 2.0 && x <= self.from + catch * 1.5 {
            DragMode::DraggingLeftHandle
        } else if x >= self.to - catch * 1.5 && x <= self.to + catch / 2.0 {
            DragMode::DraggingRightHandle
        } else if x < self.from || x > self.to {
            DragMode::Ignoring
        } else {
            DragMode::DraggingWindow {
                offset: (self.from + self.to) / 2.0 - x,
            }
        }
    }

    fn apply_drag(&mut self, x: f64) -> Option<Scope> {
        if !x.is_finite() {
            return None;
        }
        match self.mode {
            DragMode::Idle | DragMode::Ignoring => None,
            DragMode::DraggingLeftHandle => Some(self.change_from(x)),
            DragMode::DraggingRightHandle => Some(self.change_to(x)),
            DragMode::DraggingWindow { offset } => {
                let half = (self.to - self.from) / 2.0;
                let middle = x + offset;
                Some(self.change_window(middle - half, middle + half))
            }
        }
    }
}
