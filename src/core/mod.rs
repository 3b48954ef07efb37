pub mod data_model;
pub mod grid;
pub mod layout;
pub mod path;
pub mod primitives;
pub mod scale;
pub mod types;

pub use data_model::{DEFAULT_SERIES_NAME, Normalized, SeriesSet, normalize};
pub use grid::{DEFAULT_GRID_STEPS, GridLine, build_grid_lines};
pub use layout::{LayoutConfig, LayoutGeometry, Padding, compute_geometry};
pub use path::{PathCommand, PathData, build_area_path, build_line_path};
pub use scale::{ScaleDomain, index_to_offset, value_to_offset};
pub use types::{ChartData, ChartPoint, ChartSeries, Orientation, PlotPoint, PointRef, Viewport};
