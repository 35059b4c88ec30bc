use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_ANIMATION_DURATION_SECONDS;
use crate::core::{Scope, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{DEFAULT_SELECTION_TOLERANCE, RangeSelectorConfig};

use super::{ColorScheme, RenderStyle};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can load chart setup without inventing
/// their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub main_viewport: Viewport,
    pub history_viewport: Viewport,
    #[serde(default = "default_level_count")]
    pub level_count: usize,
    #[serde(default = "default_visible_dates")]
    pub visible_dates: usize,
    #[serde(default = "default_show_dates")]
    pub show_dates: bool,
    #[serde(default = "default_initial_scope")]
    pub initial_scope: Scope,
    #[serde(default)]
    pub range_selector: RangeSelectorConfig,
    #[serde(default = "default_selection_tolerance")]
    pub selection_tolerance: f64,
    #[serde(default = "default_animation_duration_seconds")]
    pub animation_duration_seconds: f64,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl ChartEngineConfig {
    /// Creates a config with default behavior for the given surfaces.
    #[must_use]
    pub fn new(main_viewport: Viewport, history_viewport: Viewport) -> Self {
        Self {
            main_viewport,
            history_viewport,
            level_count: default_level_count(),
            visible_dates: default_visible_dates(),
            show_dates: default_show_dates(),
            initial_scope: default_initial_scope(),
            range_selector: RangeSelectorConfig::default(),
            selection_tolerance: default_selection_tolerance(),
            animation_duration_seconds: default_animation_duration_seconds(),
            color_scheme: ColorScheme::default(),
            render_style: RenderStyle::default(),
        }
    }

    /// Sets the number of grid steps above the zero line.
    #[must_use]
    pub fn with_level_count(mut self, level_count: usize) -> Self {
        self.level_count = level_count;
        self
    }

    /// Sets how many date labels stay visible at any zoom level.
    #[must_use]
    pub fn with_visible_dates(mut self, visible_dates: usize) -> Self {
        self.visible_dates = visible_dates;
        self
    }

    #[must_use]
    pub fn with_show_dates(mut self, show_dates: bool) -> Self {
        self.show_dates = show_dates;
        self
    }

    #[must_use]
    pub fn with_initial_scope(mut self, scope: Scope) -> Self {
        self.initial_scope = scope;
        self
    }

    #[must_use]
    pub fn with_range_selector(mut self, range_selector: RangeSelectorConfig) -> Self {
        self.range_selector = range_selector;
        self
    }

    #[must_use]
    pub fn with_selection_tolerance(mut self, tolerance: f64) -> Self {
        self.selection_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_animation_duration(mut self, seconds: f64) -> Self {
        self.animation_duration_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        for viewport in [self.main_viewport, self.history_viewport] {
            if !viewport.is_valid() {
                return Err(ChartError::InvalidViewport {
                    width: viewport.width,
                    height: viewport.height,
                });
            }
        }
        let scope = self.initial_scope;
        if !scope.from().is_finite()
            || !scope.to().is_finite()
            || scope.from() < 0.0
            || scope.to() > 1.0
            || scope.from() > scope.to()
        {
            return Err(ChartError::InvalidData(
                "initial scope must satisfy 0 <= from <= to <= 1".to_owned(),
            ));
        }
        if !self.selection_tolerance.is_finite() || self.selection_tolerance < 0.0 {
            return Err(ChartError::InvalidData(
                "selection tolerance must be finite and >= 0".to_owned(),
            ));
        }
        if !self.animation_duration_seconds.is_finite() || self.animation_duration_seconds < 0.0 {
            return Err(ChartError::InvalidData(
                "animation duration must be finite and >= 0".to_owned(),
            ));
        }
        self.range_selector.validate()?;
        self.render_style.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()
    }
}

fn default_level_count() -> usize {
    5
}

fn default_visible_dates() -> usize {
    6
}

fn default_show_dates() -> bool {
    true
}

fn default_initial_scope() -> Scope {
    Scope::new(0.7, 1.0)
}

fn default_selection_tolerance() -> f64 {
    DEFAULT_SELECTION_TOLERANCE
}

fn default_animation_duration_seconds() -> f64 {
    DEFAULT_ANIMATION_DURATION_SECONDS
}
