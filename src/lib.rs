//! chart-scene: declarative chart layout engine.
//!
//! Datasets go in as labeled numeric series; a `RenderFrame` of positioned,
//! styled drawing primitives comes out. Painting is left to a caller-owned
//! `render::Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, ChartKind, ChartProps, ChartState};
pub use error::{ChartError, ChartResult};
