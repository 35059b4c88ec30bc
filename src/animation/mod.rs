//! Deterministic, host-driven value animation.
//!
//! The engine never reads a wall clock. Hosts advance animations explicitly
//! with elapsed seconds, which keeps frames reproducible in tests.

use serde::{Deserialize, Serialize};

use crate::core::LevelBlend;

/// Default duration of visibility fades and level transitions.
pub const DEFAULT_ANIMATION_DURATION_SECONDS: f64 = 0.2;

/// Linear interpolation toward `target` at progress `t` in `[0, 1]`.
pub trait Interpolate: Clone {
    #[must_use]
    fn interpolate(&self, target: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        self + (target - self) * t
    }
}

impl Interpolate for Vec<f64> {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        if self.len() != target.len() {
            return target.clone();
        }
        self.iter()
            .zip(target)
            .map(|(from, to)| from.interpolate(to, t))
            .collect()
    }
}

impl Interpolate for LevelBlend {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        LevelBlend::new(
            self.from.interpolate(&target.from, t),
            self.to.interpolate(&target.to, t),
            self.ratio.interpolate(&target.ratio, t),
        )
    }
}

/// Interpolation currently running between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InFlight<T> {
    pub from: T,
    pub to: T,
    pub elapsed_seconds: f64,
    pub duration_seconds: f64,
}

impl<T: Interpolate> InFlight<T> {
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration_seconds <= 0.0 {
            return 1.0;
        }
        (self.elapsed_seconds / self.duration_seconds).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn value(&self) -> T {
        self.from.interpolate(&self.to, self.progress())
    }
}

/// A committed value plus an optional in-flight presentation animation.
///
/// The committed value is what the model considers current; the presentation
/// value is what a frame should draw while an animation runs. Starting a new
/// animation replaces the running one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animatable<T> {
    committed: T,
    in_flight: Option<InFlight<T>>,
}

impl<T: Interpolate> Animatable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            committed: value,
            in_flight: None,
        }
    }

    #[must_use]
    pub fn committed(&self) -> &T {
        &self.committed
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<&InFlight<T>> {
        self.in_flight.as_ref()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Commits `value` immediately, cancelling any running animation.
    pub fn set(&mut self, value: T) {
        self.committed = value;
        self.in_flight = None;
    }

    /// Commits `committed` and presents `from -> to` for `duration_seconds`.
    pub fn animate(&mut self, from: T, to: T, committed: T, duration_seconds: f64) {
        self.committed = committed;
        if duration_seconds <= 0.0 {
            self.in_flight = None;
            return;
        }
        self.in_flight = Some(InFlight {
            from,
            to,
            elapsed_seconds: 0.0,
            duration_seconds,
        });
    }

    /// Commits `target` and animates toward it from the current presentation value.
    pub fn animate_to(&mut self, target: T, duration_seconds: f64) {
        let from = self.presentation();
        self.animate(from, target.clone(), target, duration_seconds);
    }

    /// Value to draw right now.
    #[must_use]
    pub fn presentation(&self) -> T {
        match &self.in_flight {
            Some(in_flight) => in_flight.value(),
            None => self.committed.clone(),
        }
    }

    /// Advances the running animation. Returns `true` while it is still running.
    pub fn advance(&mut self, delta_seconds: f64) -> bool {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return false;
        };
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            in_flight.elapsed_seconds += delta_seconds;
        }
        if in_flight.elapsed_seconds >= in_flight.duration_seconds {
            self.in_flight = None;
            return false;
        }
        true
    }
}
