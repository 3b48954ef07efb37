use crate::core::{Orientation, PlotPoint, PointRef, build_area_path, build_line_path};
use crate::render::{
    AnimationKind, CircleShape, DrawPrimitive, POINT_OUTLINE_COLOR, PointAnchor, PrimitiveRole,
    PrimitiveStyle, RenderFrame, Renderer,
};

use super::ChartEngine;
use super::render_frame_builder::PlotContext;

const AREA_OPACITY: f64 = 0.18;
const POINT_OUTLINE_PX: f64 = 2.0;
const HOVERED_POINT_SCALE: f64 = 1.5;
const LINE_DRAW_MS: u32 = 900;
const SERIES_STAGGER_MS: u32 = 150;
const FADE_MS: u32 = 300;

impl<R: Renderer> ChartEngine<R> {
    /// Area fill (optional), stroke and point markers per non-empty series,
    /// in that order.
    pub(super) fn append_line_primitives(&self, frame: &mut RenderFrame, ctx: &PlotContext<'_>) {
        let geometry = ctx.geometry;
        let base_offset = ctx.value_offset(ctx.domain.baseline());
        let baseline = match geometry.orientation {
            Orientation::Vertical => geometry.plot_bottom() - base_offset,
            Orientation::Horizontal => geometry.plot_left() + base_offset,
        };

        for (order, (series_index, series)) in ctx.series.non_empty().enumerate() {
            let color = self.series_color(ctx.series, series_index);
            let series_delay = order as u32 * SERIES_STAGGER_MS;
            let points: Vec<PlotPoint> = series
                .points
                .iter()
                .enumerate()
                .map(|(index, point)| ctx.canvas_point(index, point.value))
                .collect();

            if self.config.show_area {
                let area = build_area_path(
                    &points,
                    baseline,
                    geometry.orientation,
                    self.config.smooth,
                );
                if !area.is_empty() {
                    frame.push(
                        DrawPrimitive::path(
                            PrimitiveRole::Area,
                            area,
                            PrimitiveStyle::filled(color).with_opacity(AREA_OPACITY),
                        )
                        .with_animation(self.animation(
                            AnimationKind::FadeIn,
                            series_delay,
                            LINE_DRAW_MS,
                        )),
                    );
                }
            }

            let line = build_line_path(&points, self.config.smooth);
            if !line.is_empty() {
                frame.push(
                    DrawPrimitive::path(
                        PrimitiveRole::Line,
                        line,
                        PrimitiveStyle::stroked(color, self.config.stroke_width),
                    )
                    .with_animation(self.animation(
                        AnimationKind::Draw,
                        series_delay,
                        LINE_DRAW_MS,
                    )),
                );
            }

            for (point_index, point) in points.iter().enumerate() {
                let target = PointRef::new(series_index, point_index);
                frame.anchors.push(PointAnchor {
                    target,
                    x: point.x,
                    y: point.y,
                });

                if !self.config.show_points || self.config.point_radius <= 0.0 {
                    continue;
                }
                let radius = if ctx.hover == Some(target) {
                    self.config.point_radius * HOVERED_POINT_SCALE
                } else {
                    self.config.point_radius
                };
                let fill = series.points[point_index].color.unwrap_or(color);
                frame.push(
                    DrawPrimitive::circle(
                        PrimitiveRole::Point,
                        CircleShape {
                            cx: point.x,
                            cy: point.y,
                            radius,
                        },
                        PrimitiveStyle::filled(fill)
                            .with_stroke(POINT_OUTLINE_COLOR, POINT_OUTLINE_PX),
                    )
                    .with_origin(target)
                    .with_animation(self.animation(
                        AnimationKind::FadeIn,
                        LINE_DRAW_MS + series_delay,
                        FADE_MS,
                    )),
                );
            }
        }
    }
}
