//! scope-chart: viewport engine for multi-series time/value line charts.
//!
//! The crate keeps chart math (scope, index mapping, axis level planning),
//! gesture state machines and frame building apart from any drawing backend.
//! Hosts feed series and gestures into [`ChartEngine`] and receive
//! deterministic [`render::RenderFrame`]s through a [`render::Renderer`].

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
