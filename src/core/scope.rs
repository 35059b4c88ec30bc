use serde::{Deserialize, Serialize};

/// Rounding unit applied to both scope bounds.
pub const SCOPE_PRECISION: f64 = 1e-4;

const SCOPE_ACCURACY: f64 = 10_000.0;

/// Normalized `[0, 1]` window over the time span of a series.
///
/// Both bounds are rounded to [`SCOPE_PRECISION`] on construction so float
/// noise from gesture math never looks like a zoom to downstream caches.
/// `from <= to` is a caller precondition and is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    from: f64,
    to: f64,
}

impl Scope {
    pub const FULL: Self = Self { from: 0.0, to: 1.0 };

    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from: round_to_precision(from),
            to: round_to_precision(to),
        }
    }

    #[must_use]
    pub fn from(self) -> f64 {
        self.from
    }

    #[must_use]
    pub fn to(self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.to - self.from
    }

    /// Maps a widget-relative position (`0` = left edge, `1` = right edge)
    /// into the normalized coordinate space of the full series.
    #[must_use]
    pub fn absolute_position(self, relative_x: f64) -> f64 {
        self.from + self.length() * relative_x
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::FULL
    }
}

fn round_to_precision(value: f64) -> f64 {
    (value * SCOPE_ACCURACY).round() / SCOPE_ACCURACY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_bounds_to_four_decimals() {
        let scope = Scope::new(0.123_456, 0.987_654_3);
        assert_eq!(scope.from(), 0.1235);
        assert_eq!(scope.to(), 0.9877);
    }

    #[test]
    fn reversed_bounds_are_stored_as_given() {
        let scope = Scope::new(0.8, 0.2);
        assert!(scope.length() < 0.0);
    }
}
