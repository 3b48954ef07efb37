use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::core::ChartPoint;
pub use crate::core::PointRef;

/// Currently hovered point, if any.
pub type HoverState = Option<PointRef>;

/// Caller-supplied click handler.
///
/// Receives the activated point and, for multi-series charts, the index of
/// the series it belongs to.
pub type PointClickHandler = Arc<dyn Fn(&ChartPoint, Option<usize>) + Send + Sync + 'static>;

/// Transient hover state plus click dispatch.
///
/// Hover changes are last-write-wins: entering a point replaces whatever was
/// hovered before. Data updates never touch hover state.
#[derive(Clone, Default)]
pub struct InteractionController {
    hover: HoverState,
    on_point_click: Option<PointClickHandler>,
}

impl fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("hover", &self.hover)
            .field("has_click_handler", &self.on_point_click.is_some())
            .finish()
    }
}

impl InteractionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub fn set_point_click_handler(&mut self, handler: Option<PointClickHandler>) {
        self.on_point_click = handler;
    }

    #[must_use]
    pub fn has_point_click_handler(&self) -> bool {
        self.on_point_click.is_some()
    }

    /// Returns `true` when the hover target changed.
    pub fn on_enter(&mut self, series_index: usize, point_index: usize) -> bool {
        let next = Some(PointRef::new(series_index, point_index));
        let changed = self.hover != next;
        self.hover = next;
        trace!(series_index, point_index, changed, "pointer enter");
        changed
    }

    /// Returns `true` when something was hovered before.
    pub fn on_leave(&mut self) -> bool {
        let changed = self.hover.take().is_some();
        trace!(changed, "pointer leave");
        changed
    }

    /// Forwards the activation to the click handler, synchronously.
    ///
    /// Returns `false` when no handler is installed.
    pub fn on_activate(&self, point: &ChartPoint, series_index: Option<usize>) -> bool {
        let Some(handler) = &self.on_point_click else {
            trace!(label = %point.label, "point activated without click handler");
            return false;
        };
        trace!(label = %point.label, ?series_index, "dispatching point click");
        handler(point, series_index);
        true
    }
}
