use serde::{Deserialize, Serialize};

use crate::core::grid::DEFAULT_GRID_STEPS;
use crate::core::layout::{
    DEFAULT_HORIZONTAL_CANVAS, DEFAULT_ITEM_SPACING, DEFAULT_MAX_ITEM_SIZE,
    DEFAULT_VERTICAL_CANVAS,
};
use crate::core::{LayoutConfig, Orientation, Padding};
use crate::render::{Palette, RoleAccent};

use super::{NumberLocale, ValueFormat};

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Which body the engine draws inside the shared frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Presentation configuration of one chart.
///
/// Serializable so dashboards can store chart setup next to their layout.
/// Every field has a default; partial JSON objects are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub role_accent: Option<RoleAccent>,
    pub show_legend: bool,
    pub show_grid: bool,
    pub show_points: bool,
    pub show_area: bool,
    pub smooth: bool,
    pub animated: bool,
    pub orientation: Orientation,
    pub empty_message: String,
    pub padding: Padding,
    pub max_item_size: f64,
    pub item_spacing: f64,
    pub grid_steps: usize,
    pub palette: Palette,
    pub value_format: ValueFormat,
    pub locale: NumberLocale,
    pub stroke_width: f64,
    pub point_radius: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            width: None,
            height: None,
            role_accent: None,
            show_legend: true,
            show_grid: true,
            show_points: true,
            show_area: false,
            smooth: false,
            animated: true,
            orientation: Orientation::Vertical,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_owned(),
            padding: Padding::default(),
            max_item_size: DEFAULT_MAX_ITEM_SIZE,
            item_spacing: DEFAULT_ITEM_SPACING,
            grid_steps: DEFAULT_GRID_STEPS,
            palette: Palette::default(),
            value_format: ValueFormat::default(),
            locale: NumberLocale::default(),
            stroke_width: 2.0,
            point_radius: 4.0,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_role_accent(mut self, accent: RoleAccent) -> Self {
        self.role_accent = Some(accent);
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    #[must_use]
    pub fn with_points(mut self, show: bool) -> Self {
        self.show_points = show;
        self
    }

    #[must_use]
    pub fn with_area(mut self, show: bool) -> Self {
        self.show_area = show;
        self
    }

    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the bar size cap and inter-item spacing, in pixels.
    #[must_use]
    pub fn with_item_sizing(mut self, max_item_size: f64, item_spacing: f64) -> Self {
        self.max_item_size = max_item_size;
        self.item_spacing = item_spacing;
        self
    }

    #[must_use]
    pub fn with_grid_steps(mut self, steps: usize) -> Self {
        self.grid_steps = steps;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_value_format(mut self, format: ValueFormat, locale: NumberLocale) -> Self {
        self.value_format = format;
        self.locale = locale;
        self
    }

    /// Canvas size, falling back to orientation defaults.
    #[must_use]
    pub fn canvas_size(&self) -> (f64, f64) {
        let (width, height) = match self.orientation {
            Orientation::Vertical => DEFAULT_VERTICAL_CANVAS,
            Orientation::Horizontal => DEFAULT_HORIZONTAL_CANVAS,
        };
        (self.width.unwrap_or(width), self.height.unwrap_or(height))
    }

    #[must_use]
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            width: self.width,
            height: self.height,
            padding: self.padding,
            max_item_size: self.max_item_size,
            item_spacing: self.item_spacing,
            has_title: self.title.as_deref().is_some_and(|title| !title.is_empty()),
            has_subtitle: self
                .subtitle
                .as_deref()
                .is_some_and(|subtitle| !subtitle.is_empty()),
            has_legend: self.show_legend,
        }
    }
}
