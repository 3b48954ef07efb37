use crate::render::{
    DrawPrimitive, PrimitiveRole, PrimitiveStyle, RectShape, RenderFrame, Renderer,
    TOOLTIP_BACKGROUND, TOOLTIP_TEXT_COLOR, TextHAlign, TextShape,
};

use super::ChartEngine;
use super::layout_helpers::{clamp_box_start, estimate_label_text_width_px};
use super::render_frame_builder::{LABEL_FONT_PX, PlotContext};

const TOOLTIP_PADDING_X_PX: f64 = 8.0;
const TOOLTIP_HEIGHT_PX: f64 = 24.0;
const TOOLTIP_GAP_PX: f64 = 8.0;
const TOOLTIP_OPACITY: f64 = 0.92;

impl<R: Renderer> ChartEngine<R> {
    /// Tooltip box above the hovered point, flipped below when it would
    /// leave the canvas. Stale hover targets are skipped silently.
    pub(super) fn append_tooltip_primitives(
        &self,
        frame: &mut RenderFrame,
        ctx: &PlotContext<'_>,
    ) {
        let Some(target) = ctx.hover else {
            return;
        };
        let (Some(point), Some(anchor)) = (ctx.series.point(target), frame.anchor(target)) else {
            return;
        };

        let value = self.format_value(point.value);
        let text = if ctx.series.is_multi_series() {
            let series_name = &ctx.series.series()[target.series_index].name;
            format!("{series_name} · {}: {value}", point.label)
        } else {
            format!("{}: {value}", point.label)
        };

        let geometry = ctx.geometry;
        let width = estimate_label_text_width_px(&text, LABEL_FONT_PX) + 2.0 * TOOLTIP_PADDING_X_PX;
        let x = clamp_box_start(anchor.x - width / 2.0, width, 0.0, geometry.canvas_width);
        let above = anchor.y - TOOLTIP_GAP_PX - TOOLTIP_HEIGHT_PX;
        let y = if above >= 0.0 {
            above
        } else {
            anchor.y + TOOLTIP_GAP_PX
        };

        frame.push(
            DrawPrimitive::rect(
                PrimitiveRole::Tooltip,
                RectShape {
                    x,
                    y,
                    width,
                    height: TOOLTIP_HEIGHT_PX,
                    corner_radius: 4.0,
                },
                PrimitiveStyle::filled(TOOLTIP_BACKGROUND).with_opacity(TOOLTIP_OPACITY),
            )
            .with_origin(target),
        );
        frame.push(
            DrawPrimitive::text(
                PrimitiveRole::Tooltip,
                TextShape {
                    text,
                    x: x + width / 2.0,
                    y: y + TOOLTIP_HEIGHT_PX / 2.0 + LABEL_FONT_PX / 3.0,
                    font_size_px: LABEL_FONT_PX,
                    h_align: TextHAlign::Center,
                    bold: false,
                },
                TOOLTIP_TEXT_COLOR,
            )
            .with_origin(target),
        );
    }
}
