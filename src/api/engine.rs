use tracing::debug;

use crate::core::{Normalized, Viewport, normalize};
use crate::error::ChartResult;
use crate::interaction::InteractionController;
use crate::render::{RenderFrame, Renderer};

use super::chart_props::ResolvedState;
use super::validation::validate_chart_config;
use super::{ChartConfig, ChartKind, ChartProps, ChartState, ValueFormatterFn};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the current props, configuration and interaction state
/// and runs the layout pipeline into its renderer. Each render is a pure
/// function of (props, config, hover).
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) kind: ChartKind,
    pub(super) config: ChartConfig,
    pub(super) props: ChartProps,
    pub(super) normalized: Normalized,
    pub(super) interaction: InteractionController,
    pub(super) value_formatter: Option<ValueFormatterFn>,
    pub(super) last_frame: Option<RenderFrame>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, kind: ChartKind, config: ChartConfig) -> ChartResult<Self> {
        validate_chart_config(&config)?;
        debug!(?kind, orientation = ?config.orientation, "chart engine created");

        Ok(Self {
            renderer,
            kind,
            config,
            props: ChartProps::default(),
            normalized: Normalized::Empty,
            interaction: InteractionController::new(),
            value_formatter: None,
            last_frame: None,
        })
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        validate_chart_config(&config)?;
        debug!(orientation = ?config.orientation, "chart config replaced");
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn props(&self) -> &ChartProps {
        &self.props
    }

    #[must_use]
    pub fn normalized(&self) -> &Normalized {
        &self.normalized
    }

    #[must_use]
    pub fn state(&self) -> ChartState {
        ResolvedState::resolve(&self.props, &self.normalized).state()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let (width, height) = self.config.canvas_size();
        Viewport::new(width.ceil() as u32, height.ceil() as u32)
    }

    /// Replaces the built-in value formatting rules with a host formatter.
    pub fn set_value_formatter(&mut self, formatter: Option<ValueFormatterFn>) {
        self.value_formatter = formatter;
    }

    /// Frame produced by the most recent successful `render`.
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)?;
        debug!(
            state = ?frame.state,
            primitives = frame.primitives.len(),
            legend = frame.legend.len(),
            "rendered chart frame"
        );
        self.last_frame = Some(frame);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn renormalize(&mut self) {
        self.normalized = normalize(self.props.data.as_ref());
    }
}
