use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Built-in color scheme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Day,
    Night,
}

impl ColorScheme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }
}

/// Semantic colors consumed by the frame builders.
///
/// The engine is color-scheme agnostic; hosts may supply any palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTheme {
    pub background: Color,
    pub grid_line: Color,
    pub zero_line: Color,
    pub axis_text: Color,
    pub tooltip_background: Color,
    pub tooltip_date_text: Color,
    pub history_fade: Color,
    pub range_border: Color,
    pub handle_arrow: Color,
}

impl ChartTheme {
    #[must_use]
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Day => Self::day(),
            ColorScheme::Night => Self::night(),
        }
    }

    #[must_use]
    pub fn day() -> Self {
        Self {
            background: Color::rgb(1.0, 1.0, 1.0),
            grid_line: rgb_hex(0xF0, 0xF0, 0xF0),
            zero_line: rgb_hex(0xD0, 0xD0, 0xD0),
            axis_text: rgb_hex(0xA0, 0xA0, 0xA0),
            tooltip_background: rgb_hex(0xF5, 0xF5, 0xFA),
            tooltip_date_text: rgb_hex(0x71, 0x71, 0x71),
            history_fade: rgb_hex(0xF5, 0xF5, 0xF5).with_alpha_factor(0.6),
            range_border: rgb_hex(0xCB, 0xD4, 0xDD).with_alpha_factor(0.9),
            handle_arrow: Color::rgb(1.0, 1.0, 1.0),
        }
    }

    #[must_use]
    pub fn night() -> Self {
        Self {
            background: rgb_hex(0x24, 0x30, 0x3F),
            grid_line: rgb_hex(0x1D, 0x27, 0x33),
            zero_line: rgb_hex(0x1A, 0x22, 0x2C),
            axis_text: rgb_hex(0x60, 0x6D, 0x7C),
            tooltip_background: rgb_hex(0x1D, 0x28, 0x36),
            tooltip_date_text: Color::rgb(1.0, 1.0, 1.0),
            history_fade: rgb_hex(0x1F, 0x2A, 0x39).with_alpha_factor(0.6),
            range_border: rgb_hex(0x38, 0x46, 0x57).with_alpha_factor(0.9),
            handle_arrow: Color::rgb(1.0, 1.0, 1.0),
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::day()
    }
}

fn rgb_hex(red: u8, green: u8, blue: u8) -> Color {
    Color::rgb(
        f64::from(red) / 255.0,
        f64::from(green) / 255.0,
        f64::from(blue) / 255.0,
    )
}
