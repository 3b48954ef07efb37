use tracing::trace;

use crate::core::layout::{SUBTITLE_BLOCK_HEIGHT, TITLE_BLOCK_HEIGHT};
use crate::core::{
    LayoutGeometry, PlotPoint, ScaleDomain, SeriesSet, compute_geometry, value_to_offset,
};
use crate::interaction::HoverState;
use crate::render::{
    AnimationDescriptor, AnimationKind, Color, DrawPrimitive, FrameState, MUTED_TEXT_COLOR,
    PrimitiveRole, RenderFrame, Renderer, TEXT_COLOR, TextHAlign, TextShape,
};

use super::chart_props::ResolvedState;
use super::value_format::format_value;
use super::{ChartEngine, ChartKind};

pub(super) const TITLE_FONT_PX: f64 = 16.0;
pub(super) const SUBTITLE_FONT_PX: f64 = 12.0;
pub(super) const LABEL_FONT_PX: f64 = 11.0;

/// Everything the body builders need for one ready pass.
pub(super) struct PlotContext<'a> {
    pub series: &'a SeriesSet,
    pub domain: ScaleDomain,
    pub geometry: LayoutGeometry,
    pub category_count: usize,
    pub hover: HoverState,
}

impl PlotContext<'_> {
    pub fn category_offset(&self, index: usize) -> f64 {
        self.geometry.item_offset(index, self.category_count)
    }

    pub fn value_offset(&self, value: f64) -> f64 {
        value_to_offset(value, self.domain, self.geometry.value_axis_length())
    }

    pub fn canvas_point(&self, index: usize, value: f64) -> PlotPoint {
        let (x, y) = self
            .geometry
            .to_canvas(self.category_offset(index), self.value_offset(value));
        PlotPoint::new(x, y)
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Runs the pipeline for the current (props, config, hover) without
    /// touching the renderer.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let viewport = self.viewport();
        match ResolvedState::resolve(&self.props, &self.normalized) {
            ResolvedState::Loading => self.build_loading_frame(viewport),
            ResolvedState::Error(message) => self.build_error_frame(viewport, message),
            ResolvedState::Empty => self.build_empty_frame(viewport),
            ResolvedState::Ready(series) => {
                let mut frame = RenderFrame::new(viewport, FrameState::Ready);
                self.append_ready_primitives(&mut frame, series);
                frame
            }
        }
    }

    fn append_ready_primitives(&self, frame: &mut RenderFrame, series: &SeriesSet) {
        let domain = ScaleDomain::compute(series.series());
        let category_count = series.category_count();
        let geometry = compute_geometry(
            series.non_empty().count(),
            category_count,
            self.config.orientation,
            &self.config.layout_config(),
        );
        trace!(
            min = domain.min,
            max = domain.max,
            category_count,
            kind = ?self.kind,
            "building ready frame"
        );

        let ctx = PlotContext {
            series,
            domain,
            geometry,
            category_count,
            hover: self.interaction.hover(),
        };

        self.append_title_primitives(frame);
        self.append_grid_primitives(frame, &ctx);
        match self.kind {
            ChartKind::Bar => self.append_bar_primitives(frame, &ctx),
            ChartKind::Line => self.append_line_primitives(frame, &ctx),
        }
        self.append_category_labels(frame, &ctx);
        if self.config.show_legend {
            self.append_legend_primitives(frame, &ctx);
        }
        self.append_tooltip_primitives(frame, &ctx);

        frame.domain = Some(domain);
        frame.geometry = Some(geometry);
    }

    fn append_title_primitives(&self, frame: &mut RenderFrame) {
        let left = self.config.padding.left;
        let mut y = 0.0;
        if let Some(title) = self.config.title.as_deref().filter(|t| !t.is_empty()) {
            y += TITLE_BLOCK_HEIGHT;
            frame.push(DrawPrimitive::text(
                PrimitiveRole::Title,
                TextShape {
                    text: title.to_owned(),
                    x: left,
                    y: y - 8.0,
                    font_size_px: TITLE_FONT_PX,
                    h_align: TextHAlign::Left,
                    bold: true,
                },
                TEXT_COLOR,
            ));
        }
        if let Some(subtitle) = self.config.subtitle.as_deref().filter(|s| !s.is_empty()) {
            y += SUBTITLE_BLOCK_HEIGHT;
            frame.push(DrawPrimitive::text(
                PrimitiveRole::Subtitle,
                TextShape {
                    text: subtitle.to_owned(),
                    x: left,
                    y: y - 4.0,
                    font_size_px: SUBTITLE_FONT_PX,
                    h_align: TextHAlign::Left,
                    bold: false,
                },
                MUTED_TEXT_COLOR,
            ));
        }
    }

    pub(super) fn format_value(&self, value: f64) -> String {
        match &self.value_formatter {
            Some(formatter) => formatter(value),
            None => format_value(value, &self.config.value_format, self.config.locale),
        }
    }

    /// Series color: explicit series color, then role accent for the first
    /// series, then the palette.
    pub(super) fn series_color(&self, series: &SeriesSet, series_index: usize) -> Color {
        if let Some(color) = series
            .series()
            .get(series_index)
            .and_then(|series| series.color)
        {
            return color;
        }
        if series_index == 0 {
            if let Some(accent) = self.config.role_accent {
                return accent.color();
            }
        }
        self.config.palette.color(series_index)
    }

    pub(super) fn animation(
        &self,
        kind: AnimationKind,
        delay_ms: u32,
        duration_ms: u32,
    ) -> Option<AnimationDescriptor> {
        self.config
            .animated
            .then(|| AnimationDescriptor::new(kind, delay_ms, duration_ms))
    }
}
