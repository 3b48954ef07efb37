use crate::core::Viewport;
use crate::render::{
    AnimationDescriptor, AnimationKind, CircleShape, Color, DrawPrimitive, ERROR_COLOR, FrameState,
    MUTED_TEXT_COLOR, PANEL_COLOR, PrimitiveRole, PrimitiveStyle, RectShape, RenderFrame,
    Renderer, TEXT_COLOR, TextHAlign, TextShape, TOOLTIP_TEXT_COLOR,
};

use super::ChartEngine;

const SPINNER_RADIUS_PX: f64 = 16.0;
const SPINNER_STROKE_PX: f64 = 3.0;
const SPINNER_PERIOD_MS: u32 = 1_000;
const ICON_RADIUS_PX: f64 = 14.0;
const MESSAGE_FONT_PX: f64 = 13.0;

// Placeholder frames never compute domain or layout; they only need the
// canvas size.
impl<R: Renderer> ChartEngine<R> {
    pub(super) fn build_loading_frame(&self, viewport: Viewport) -> RenderFrame {
        let (cx, cy) = panel_center(viewport);
        let accent = self.series_accent();
        RenderFrame::new(viewport, FrameState::Loading)
            .with_primitive(panel(viewport))
            .with_primitive(
                DrawPrimitive::circle(
                    PrimitiveRole::Placeholder,
                    CircleShape {
                        cx,
                        cy,
                        radius: SPINNER_RADIUS_PX,
                    },
                    PrimitiveStyle::stroked(accent, SPINNER_STROKE_PX),
                )
                .with_animation(Some(AnimationDescriptor::new(
                    AnimationKind::Spin,
                    0,
                    SPINNER_PERIOD_MS,
                ))),
            )
    }

    /// Shows `message` verbatim; never mixes in stale chart content.
    pub(super) fn build_error_frame(&self, viewport: Viewport, message: &str) -> RenderFrame {
        let (cx, cy) = panel_center(viewport);
        let icon_y = cy - ICON_RADIUS_PX;
        let mut frame = RenderFrame::new(viewport, FrameState::Error(message.to_owned()))
            .with_primitive(panel(viewport))
            .with_primitive(DrawPrimitive::circle(
                PrimitiveRole::Placeholder,
                CircleShape {
                    cx,
                    cy: icon_y,
                    radius: ICON_RADIUS_PX,
                },
                PrimitiveStyle::filled(ERROR_COLOR),
            ))
            .with_primitive(DrawPrimitive::text(
                PrimitiveRole::Placeholder,
                TextShape {
                    text: "!".to_owned(),
                    x: cx,
                    y: icon_y + MESSAGE_FONT_PX / 3.0,
                    font_size_px: MESSAGE_FONT_PX,
                    h_align: TextHAlign::Center,
                    bold: true,
                },
                TOOLTIP_TEXT_COLOR,
            ));
        if !message.is_empty() {
            frame.push(message_text(message, cx, cy + 2.0 * MESSAGE_FONT_PX, TEXT_COLOR));
        }
        frame
    }

    pub(super) fn build_empty_frame(&self, viewport: Viewport) -> RenderFrame {
        let (cx, cy) = panel_center(viewport);
        let message = self.config.empty_message.as_str();
        let mut frame = RenderFrame::new(viewport, FrameState::Empty(message.to_owned()))
            .with_primitive(panel(viewport));
        if !message.is_empty() {
            frame.push(message_text(message, cx, cy, MUTED_TEXT_COLOR));
        }
        frame
    }

    fn series_accent(&self) -> Color {
        self.config
            .role_accent
            .map_or_else(|| self.config.palette.color(0), |accent| accent.color())
    }
}

fn panel_center(viewport: Viewport) -> (f64, f64) {
    (
        f64::from(viewport.width) / 2.0,
        f64::from(viewport.height) / 2.0,
    )
}

fn panel(viewport: Viewport) -> DrawPrimitive {
    DrawPrimitive::rect(
        PrimitiveRole::Placeholder,
        RectShape {
            x: 0.0,
            y: 0.0,
            width: f64::from(viewport.width),
            height: f64::from(viewport.height),
            corner_radius: 8.0,
        },
        PrimitiveStyle::filled(PANEL_COLOR),
    )
}

fn message_text(
    message: &str,
    x: f64,
    y: f64,
    color: Color,
) -> DrawPrimitive {
    DrawPrimitive::text(
        PrimitiveRole::Placeholder,
        TextShape {
            text: message.to_owned(),
            x,
            y,
            font_size_px: MESSAGE_FONT_PX,
            h_align: TextHAlign::Center,
            bold: false,
        },
        color,
    )
}
