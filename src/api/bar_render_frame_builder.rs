use smallvec::SmallVec;

use crate::core::{Orientation, PointRef};
use crate::render::{
    AnimationKind, DrawPrimitive, PointAnchor, PrimitiveRole, PrimitiveStyle, RectShape,
    RenderFrame, Renderer,
};

use super::ChartEngine;
use super::render_frame_builder::PlotContext;

const BAR_CORNER_RADIUS_PX: f64 = 3.0;
const BAR_OPACITY: f64 = 0.9;
const BAR_DIMMED_OPACITY: f64 = 0.6;
const BAR_GROW_MS: u32 = 600;
const BAR_STAGGER_MS: u32 = 60;

impl<R: Renderer> ChartEngine<R> {
    /// Bars grouped per category; each non-empty series owns one slot of the
    /// group, so a single series fills the whole item size.
    pub(super) fn append_bar_primitives(&self, frame: &mut RenderFrame, ctx: &PlotContext<'_>) {
        let slots: SmallVec<[usize; 4]> = ctx.series.non_empty().map(|(index, _)| index).collect();
        let group_size = ctx.geometry.item_size;
        let bar_size = group_size / slots.len().max(1) as f64;
        let base_offset = ctx.value_offset(ctx.domain.baseline());
        let geometry = ctx.geometry;

        for (slot, &series_index) in slots.iter().enumerate() {
            let series = &ctx.series.series()[series_index];
            let series_color = self.series_color(ctx.series, series_index);

            for (point_index, point) in series.points.iter().enumerate() {
                let start =
                    ctx.category_offset(point_index) - group_size / 2.0 + slot as f64 * bar_size;
                let value_offset = ctx.value_offset(point.value);
                let low = base_offset.min(value_offset);
                let high = base_offset.max(value_offset);

                let (rect, anchor_x, anchor_y) = match geometry.orientation {
                    Orientation::Vertical => (
                        RectShape {
                            x: geometry.plot_left() + start,
                            y: geometry.plot_bottom() - high,
                            width: bar_size,
                            height: high - low,
                            corner_radius: BAR_CORNER_RADIUS_PX.min(bar_size / 2.0),
                        },
                        geometry.plot_left() + start + bar_size / 2.0,
                        geometry.plot_bottom() - value_offset,
                    ),
                    Orientation::Horizontal => (
                        RectShape {
                            x: geometry.plot_left() + low,
                            y: geometry.plot_top() + start,
                            width: high - low,
                            height: bar_size,
                            corner_radius: BAR_CORNER_RADIUS_PX.min(bar_size / 2.0),
                        },
                        geometry.plot_left() + value_offset,
                        geometry.plot_top() + start + bar_size / 2.0,
                    ),
                };

                let target = PointRef::new(series_index, point_index);
                let opacity = match ctx.hover {
                    Some(hovered) if hovered == target => 1.0,
                    Some(_) => BAR_DIMMED_OPACITY,
                    None => BAR_OPACITY,
                };
                let delay = (point_index + slot) as u32 * BAR_STAGGER_MS;
                let color = point.color.unwrap_or(series_color);

                frame.push(
                    DrawPrimitive::rect(
                        PrimitiveRole::Bar,
                        rect,
                        PrimitiveStyle::filled(color).with_opacity(opacity),
                    )
                    .with_origin(target)
                    .with_animation(self.animation(AnimationKind::Grow, delay, BAR_GROW_MS)),
                );
                frame.anchors.push(PointAnchor {
                    target,
                    x: anchor_x,
                    y: anchor_y,
                });
            }
        }
    }
}
