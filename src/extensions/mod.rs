//! Host-facing extension points.

pub mod listeners;

pub use listeners::{ChartEvent, ChartListener, ListenerContext};
