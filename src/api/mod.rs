mod chart_view;
mod engine;
mod engine_config;
mod engine_snapshot;
mod history_controller;
mod history_frame_builder;
pub mod json_contract;
mod label_format;
mod listener_dispatch;
mod listener_registry;
mod render_frame_builder;
mod render_style;
mod selection_controller;
mod theme;
mod tooltip_builder;
mod visibility_controller;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1, parse_chart_data,
};
pub use label_format::{format_date_label, format_value_label, format_year_label};
pub use render_style::RenderStyle;
pub use selection_controller::{SelectedPoint, SelectedValue};
pub use theme::{ChartTheme, ColorScheme};
