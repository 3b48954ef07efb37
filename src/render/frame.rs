use serde::{Deserialize, Serialize};

use crate::core::{LayoutGeometry, PointRef, ScaleDomain, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawPrimitive, PrimitiveRole};

/// Which branch of the state machine produced a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum FrameState {
    Loading,
    Error(String),
    Empty(String),
    Ready,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Pixel anchor of one plotted point: bar tip or line vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointAnchor {
    pub target: PointRef,
    pub x: f64,
    pub y: f64,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are ordered back to front. `domain` and `geometry` are only
/// present when the full pipeline ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub state: FrameState,
    pub primitives: Vec<DrawPrimitive>,
    pub legend: Vec<LegendEntry>,
    pub domain: Option<ScaleDomain>,
    pub geometry: Option<LayoutGeometry>,
    pub anchors: Vec<PointAnchor>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, state: FrameState) -> Self {
        Self {
            viewport,
            state,
            primitives: Vec::new(),
            legend: Vec::new(),
            domain: None,
            geometry: None,
            anchors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_primitive(mut self, primitive: DrawPrimitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    pub fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }

    pub fn primitives_with_role(
        &self,
        role: PrimitiveRole,
    ) -> impl Iterator<Item = &DrawPrimitive> {
        self.primitives
            .iter()
            .filter(move |primitive| primitive.role == role)
    }

    #[must_use]
    pub fn count_role(&self, role: PrimitiveRole) -> usize {
        self.primitives_with_role(role).count()
    }

    #[must_use]
    pub fn anchor(&self, target: PointRef) -> Option<PointAnchor> {
        self.anchors
            .iter()
            .copied()
            .find(|anchor| anchor.target == target)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }
        for entry in &self.legend {
            entry.color.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
