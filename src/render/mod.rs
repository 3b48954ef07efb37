mod frame;
mod null_renderer;
mod palette;
mod primitives;

pub use frame::{FrameState, LegendEntry, PointAnchor, RenderFrame};
pub use null_renderer::NullRenderer;
pub use palette::{
    BASELINE_COLOR, DEFAULT_PALETTE, ERROR_COLOR, GRID_COLOR, MUTED_TEXT_COLOR, PANEL_COLOR,
    POINT_OUTLINE_COLOR, Palette, RoleAccent, TEXT_COLOR, TOOLTIP_BACKGROUND, TOOLTIP_TEXT_COLOR,
};
pub use primitives::{
    AnimationDescriptor, AnimationKind, CircleShape, Color, DrawPrimitive, LineShape,
    LineStrokeStyle, PrimitiveRole, PrimitiveStyle, RectShape, Shape, TextHAlign, TextShape,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering surface.
///
/// Surfaces receive a fully materialized, deterministic `RenderFrame` so
/// painting code stays isolated from chart data and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
