mod bar_render_frame_builder;
mod chart_config;
mod chart_props;
mod data_controller;
mod engine;
mod grid_render_frame_builder;
mod interaction_coordinator;
mod json_contract;
mod layout_helpers;
mod legend_render_frame_builder;
mod line_render_frame_builder;
mod placeholder_render_frame_builder;
mod render_frame_builder;
mod tooltip_render_frame_builder;
mod validation;
mod value_format;

pub use chart_config::{ChartConfig, ChartKind, DEFAULT_EMPTY_MESSAGE};
pub use chart_props::{ChartProps, ChartState};
pub use engine::ChartEngine;
pub use interaction_coordinator::HIT_RADIUS_PX;
pub use json_contract::{RENDER_FRAME_JSON_SCHEMA_V1, RenderFrameJsonContractV1};
pub use value_format::{NumberLocale, ValueFormat, ValueFormatterFn, format_value};
