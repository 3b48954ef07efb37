use serde::{Deserialize, Serialize};

use crate::core::{Orientation, index_to_offset};

pub const DEFAULT_VERTICAL_CANVAS: (f64, f64) = (800.0, 400.0);
pub const DEFAULT_HORIZONTAL_CANVAS: (f64, f64) = (600.0, 480.0);
pub const DEFAULT_MAX_ITEM_SIZE: f64 = 48.0;
pub const DEFAULT_ITEM_SPACING: f64 = 12.0;
pub const MIN_ITEM_SIZE: f64 = 1.0;

pub const TITLE_BLOCK_HEIGHT: f64 = 28.0;
pub const SUBTITLE_BLOCK_HEIGHT: f64 = 18.0;
pub const LEGEND_BLOCK_HEIGHT: f64 = 28.0;

/// Reserved space around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Padding {
    /// Left/bottom leave room for tick labels; top/right are breathing room.
    fn default() -> Self {
        Self::new(24.0, 24.0, 40.0, 64.0)
    }
}

/// Inputs of the layout computation that come from chart configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub padding: Padding,
    pub max_item_size: f64,
    pub item_spacing: f64,
    pub has_title: bool,
    pub has_subtitle: bool,
    pub has_legend: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            padding: Padding::default(),
            max_item_size: DEFAULT_MAX_ITEM_SIZE,
            item_spacing: DEFAULT_ITEM_SPACING,
            has_title: false,
            has_subtitle: false,
            has_legend: false,
        }
    }
}

/// Plot-area geometry of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub padding: Padding,
    pub plot_width: f64,
    pub plot_height: f64,
    /// Bar width (or bar-group width) along the category axis.
    pub item_size: f64,
    pub item_spacing: f64,
    pub orientation: Orientation,
}

impl LayoutGeometry {
    #[must_use]
    pub fn plot_left(&self) -> f64 {
        self.padding.left
    }

    #[must_use]
    pub fn plot_top(&self) -> f64 {
        self.padding.top
    }

    #[must_use]
    pub fn plot_right(&self) -> f64 {
        self.padding.left + self.plot_width
    }

    #[must_use]
    pub fn plot_bottom(&self) -> f64 {
        self.padding.top + self.plot_height
    }

    /// Length of the axis carrying categories.
    #[must_use]
    pub fn category_axis_length(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.plot_width,
            Orientation::Horizontal => self.plot_height,
        }
    }

    /// Length of the axis carrying values.
    #[must_use]
    pub fn value_axis_length(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.plot_height,
            Orientation::Horizontal => self.plot_width,
        }
    }

    /// Centre of the `index`-th of `count` items along the category axis.
    #[must_use]
    pub fn item_offset(&self, index: usize, count: usize) -> f64 {
        index_to_offset(
            index,
            count,
            self.category_axis_length(),
            self.item_size,
            self.item_spacing,
        )
    }

    /// Converts (category offset, value offset) into canvas coordinates.
    ///
    /// Vertical charts grow values upward from the plot bottom; horizontal
    /// charts grow them rightward from the plot left edge.
    #[must_use]
    pub fn to_canvas(&self, category_offset: f64, value_offset: f64) -> (f64, f64) {
        match self.orientation {
            Orientation::Vertical => (
                self.plot_left() + category_offset,
                self.plot_bottom() - value_offset,
            ),
            Orientation::Horizontal => (
                self.plot_left() + value_offset,
                self.plot_top() + category_offset,
            ),
        }
    }
}

/// Computes canvas, padding and per-item sizes.
///
/// `item_size = min(max_item_size, (axis - spacing * n) / n)`, never below
/// [`MIN_ITEM_SIZE`]. The `n` gaps cover the `n - 1` inner gaps plus a
/// half-spacing margin at each end. When clamping would overflow the axis
/// the reported spacing shrinks so items still fit.
#[must_use]
pub fn compute_geometry(
    series_count: usize,
    item_count: usize,
    orientation: Orientation,
    config: &LayoutConfig,
) -> LayoutGeometry {
    let (default_width, default_height) = match orientation {
        Orientation::Vertical => DEFAULT_VERTICAL_CANVAS,
        Orientation::Horizontal => DEFAULT_HORIZONTAL_CANVAS,
    };
    let canvas_width = config.width.unwrap_or(default_width).max(0.0);
    let canvas_height = config.height.unwrap_or(default_height).max(0.0);

    let mut padding = config.padding;
    if config.has_title {
        padding.top += TITLE_BLOCK_HEIGHT;
    }
    if config.has_subtitle {
        padding.top += SUBTITLE_BLOCK_HEIGHT;
    }
    if config.has_legend {
        padding.bottom += LEGEND_BLOCK_HEIGHT;
    }

    let plot_width = (canvas_width - padding.left - padding.right).max(0.0);
    let plot_height = (canvas_height - padding.top - padding.bottom).max(0.0);
    let category_axis = match orientation {
        Orientation::Vertical => plot_width,
        Orientation::Horizontal => plot_height,
    };

    let (item_size, item_spacing) = resolve_item_size(
        item_count,
        category_axis,
        config.max_item_size,
        config.item_spacing,
    );

    tracing::trace!(
        series_count,
        item_count,
        plot_width,
        plot_height,
        item_size,
        "computed layout geometry"
    );

    LayoutGeometry {
        canvas_width,
        canvas_height,
        padding,
        plot_width,
        plot_height,
        item_size,
        item_spacing,
        orientation,
    }
}

fn resolve_item_size(count: usize, axis: f64, max_size: f64, spacing: f64) -> (f64, f64) {
    if count == 0 {
        return (max_size.max(MIN_ITEM_SIZE), spacing.max(0.0));
    }
    let n = count as f64;
    let spacing = spacing.max(0.0);
    let raw = (axis - spacing * n) / n;
    let size = raw.min(max_size).max(MIN_ITEM_SIZE);
    let room = ((axis - size * n) / n).max(0.0);
    (size, spacing.min(room))
}
