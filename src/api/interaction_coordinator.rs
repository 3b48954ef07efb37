use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::PointRef;
use crate::error::ChartResult;
use crate::interaction::{HoverState, PointClickHandler};
use crate::render::{PrimitiveRole, Renderer, Shape};

use super::ChartEngine;

/// Anchors farther than this from the pointer are not hit.
pub const HIT_RADIUS_PX: f64 = 12.0;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.hover()
    }

    /// Installs the handler invoked when a point is activated.
    pub fn set_point_click_handler(&mut self, handler: Option<PointClickHandler>) {
        self.interaction.set_point_click_handler(handler);
    }

    /// Hovers a point and re-renders if the target changed and a frame was
    /// already rendered.
    pub fn pointer_enter(&mut self, series_index: usize, point_index: usize) -> ChartResult<bool> {
        let changed = self.interaction.on_enter(series_index, point_index);
        self.rerender_if(changed)?;
        Ok(changed)
    }

    pub fn pointer_leave(&mut self) -> ChartResult<bool> {
        let changed = self.interaction.on_leave();
        self.rerender_if(changed)?;
        Ok(changed)
    }

    /// Translates a raw pointer position into enter/leave using the last
    /// rendered frame.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<HoverState> {
        match self.hit_test(x, y) {
            Some(target) => {
                self.pointer_enter(target.series_index, target.point_index)?;
            }
            None => {
                self.pointer_leave()?;
            }
        }
        Ok(self.interaction.hover())
    }

    /// Hit-tests then activates. Returns the activated target.
    pub fn pointer_click(&mut self, x: f64, y: f64) -> Option<PointRef> {
        let target = self.hit_test(x, y)?;
        self.activate(target).then_some(target)
    }

    /// Dispatches a click for `target` to the installed handler.
    ///
    /// The series index is only passed for multi-series charts. Returns
    /// `false` for unknown targets or when no handler is installed.
    pub fn activate(&self, target: PointRef) -> bool {
        let Some(series) = self.normalized.series_set() else {
            trace!(?target, "activation ignored without data");
            return false;
        };
        let Some(point) = series.point(target) else {
            trace!(?target, "activation ignored for unknown point");
            return false;
        };
        let series_index = series.is_multi_series().then_some(target.series_index);
        self.interaction.on_activate(point, series_index)
    }

    /// Topmost bar containing the position, else the nearest point anchor
    /// within [`HIT_RADIUS_PX`].
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<PointRef> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let frame = self.last_frame.as_ref()?;

        let bar_hit = frame
            .primitives
            .iter()
            .rev()
            .filter(|primitive| primitive.role == PrimitiveRole::Bar)
            .find_map(|primitive| match (&primitive.shape, primitive.origin) {
                (Shape::Rect(rect), Some(origin)) if rect.contains(x, y) => Some(origin),
                _ => None,
            });
        if bar_hit.is_some() {
            return bar_hit;
        }

        frame
            .anchors
            .iter()
            .map(|anchor| {
                let distance = (anchor.x - x).hypot(anchor.y - y);
                (OrderedFloat(distance), anchor.target)
            })
            .filter(|(distance, _)| distance.0 <= HIT_RADIUS_PX)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, target)| target)
    }

    fn rerender_if(&mut self, changed: bool) -> ChartResult<()> {
        if changed && self.last_frame.is_some() {
            self.render()?;
        }
        Ok(())
    }
}
