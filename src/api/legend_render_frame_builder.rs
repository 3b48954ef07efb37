use crate::render::{
    DrawPrimitive, LegendEntry, PrimitiveRole, PrimitiveStyle, RectShape, RenderFrame, Renderer,
    TEXT_COLOR, TextHAlign, TextShape,
};

use super::ChartEngine;
use super::layout_helpers::estimate_label_text_width_px;
use super::render_frame_builder::{LABEL_FONT_PX, PlotContext};

const SWATCH_PX: f64 = 10.0;
const SWATCH_GAP_PX: f64 = 6.0;
const ENTRY_GAP_PX: f64 = 16.0;
const LEGEND_BASELINE_FROM_BOTTOM_PX: f64 = 10.0;

impl<R: Renderer> ChartEngine<R> {
    /// One entry per plotted series, laid out left to right in the legend
    /// row at the bottom of the canvas.
    pub(super) fn append_legend_primitives(
        &self,
        frame: &mut RenderFrame,
        ctx: &PlotContext<'_>,
    ) {
        let geometry = ctx.geometry;
        let baseline_y = geometry.canvas_height - LEGEND_BASELINE_FROM_BOTTOM_PX;
        let mut x = geometry.plot_left();

        for (series_index, series) in ctx.series.non_empty() {
            let color = self.series_color(ctx.series, series_index);
            frame.legend.push(LegendEntry {
                label: series.name.clone(),
                color,
            });

            frame.push(DrawPrimitive::rect(
                PrimitiveRole::LegendSwatch,
                RectShape {
                    x,
                    y: baseline_y - SWATCH_PX,
                    width: SWATCH_PX,
                    height: SWATCH_PX,
                    corner_radius: 2.0,
                },
                PrimitiveStyle::filled(color),
            ));
            x += SWATCH_PX + SWATCH_GAP_PX;

            if series.name.is_empty() {
                x += ENTRY_GAP_PX;
                continue;
            }
            frame.push(DrawPrimitive::text(
                PrimitiveRole::LegendLabel,
                TextShape {
                    text: series.name.clone(),
                    x,
                    y: baseline_y,
                    font_size_px: LABEL_FONT_PX,
                    h_align: TextHAlign::Left,
                    bold: false,
                },
                TEXT_COLOR,
            ));
            x += estimate_label_text_width_px(&series.name, LABEL_FONT_PX) + ENTRY_GAP_PX;
        }
    }
}
