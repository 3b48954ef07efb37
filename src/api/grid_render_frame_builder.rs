use crate::core::{Orientation, build_grid_lines};
use crate::render::{
    BASELINE_COLOR, DrawPrimitive, GRID_COLOR, LineShape, MUTED_TEXT_COLOR, PrimitiveRole,
    PrimitiveStyle, RenderFrame, Renderer, TEXT_COLOR, TextHAlign, TextShape,
};

use super::ChartEngine;
use super::render_frame_builder::{LABEL_FONT_PX, PlotContext};

const GRID_STROKE_PX: f64 = 1.0;
const AXIS_LABEL_GAP_PX: f64 = 8.0;
const CATEGORY_LABEL_OFFSET_PX: f64 = 18.0;

impl<R: Renderer> ChartEngine<R> {
    /// Value-axis reference lines with their labels.
    ///
    /// The zero line is always drawn, solid. Other lines are dashed and only
    /// drawn when the grid is shown; their labels are always emitted.
    pub(super) fn append_grid_primitives(&self, frame: &mut RenderFrame, ctx: &PlotContext<'_>) {
        let geometry = ctx.geometry;
        let lines = build_grid_lines(
            ctx.domain,
            geometry.value_axis_length(),
            self.config.grid_steps,
            |value| self.format_value(value),
        );

        for line in lines {
            let shape = match geometry.orientation {
                Orientation::Vertical => {
                    let y = geometry.plot_bottom() - line.position;
                    LineShape {
                        x1: geometry.plot_left(),
                        y1: y,
                        x2: geometry.plot_right(),
                        y2: y,
                    }
                }
                Orientation::Horizontal => {
                    let x = geometry.plot_left() + line.position;
                    LineShape {
                        x1: x,
                        y1: geometry.plot_top(),
                        x2: x,
                        y2: geometry.plot_bottom(),
                    }
                }
            };

            if line.is_baseline {
                frame.push(DrawPrimitive::line(
                    PrimitiveRole::GridLine,
                    shape,
                    PrimitiveStyle::stroked(BASELINE_COLOR, GRID_STROKE_PX),
                ));
            } else if self.config.show_grid {
                frame.push(DrawPrimitive::line(
                    PrimitiveRole::GridLine,
                    shape,
                    PrimitiveStyle::stroked(GRID_COLOR, GRID_STROKE_PX).dashed(),
                ));
            }

            if line.label.is_empty() {
                continue;
            }
            let label = match geometry.orientation {
                Orientation::Vertical => TextShape {
                    text: line.label,
                    x: geometry.plot_left() - AXIS_LABEL_GAP_PX,
                    y: shape.y1 + LABEL_FONT_PX / 3.0,
                    font_size_px: LABEL_FONT_PX,
                    h_align: TextHAlign::Right,
                    bold: false,
                },
                Orientation::Horizontal => TextShape {
                    text: line.label,
                    x: shape.x1,
                    y: geometry.plot_bottom() + CATEGORY_LABEL_OFFSET_PX,
                    font_size_px: LABEL_FONT_PX,
                    h_align: TextHAlign::Center,
                    bold: false,
                },
            };
            frame.push(DrawPrimitive::text(
                PrimitiveRole::AxisLabel,
                label,
                MUTED_TEXT_COLOR,
            ));
        }
    }

    /// One label per category slot, placed along the category axis.
    pub(super) fn append_category_labels(&self, frame: &mut RenderFrame, ctx: &PlotContext<'_>) {
        let geometry = ctx.geometry;
        for index in 0..ctx.category_count {
            let Some(label) = ctx.series.category_label(index).filter(|l| !l.is_empty()) else {
                continue;
            };
            let offset = ctx.category_offset(index);
            let shape = match geometry.orientation {
                Orientation::Vertical => TextShape {
                    text: label.to_owned(),
                    x: geometry.plot_left() + offset,
                    y: geometry.plot_bottom() + CATEGORY_LABEL_OFFSET_PX,
                    font_size_px: LABEL_FONT_PX,
                    h_align: TextHAlign::Center,
                    bold: false,
                },
                Orientation::Horizontal => TextShape {
                    text: label.to_owned(),
                    x: geometry.plot_left() - AXIS_LABEL_GAP_PX,
                    y: geometry.plot_top() + offset + LABEL_FONT_PX / 3.0,
                    font_size_px: LABEL_FONT_PX,
                    h_align: TextHAlign::Right,
                    bold: false,
                },
            };
            frame.push(DrawPrimitive::text(
                PrimitiveRole::CategoryLabel,
                shape,
                TEXT_COLOR,
            ));
        }
    }
}
