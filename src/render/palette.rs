use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Fallback series colors, indexed cyclically.
pub const DEFAULT_PALETTE: [Color; 8] = [
    Color::from_rgb8(0x25, 0x63, 0xeb),
    Color::from_rgb8(0x10, 0xb9, 0x81),
    Color::from_rgb8(0xf5, 0x9e, 0x0b),
    Color::from_rgb8(0xef, 0x44, 0x44),
    Color::from_rgb8(0x8b, 0x5c, 0xf6),
    Color::from_rgb8(0x06, 0xb6, 0xd4),
    Color::from_rgb8(0xec, 0x48, 0x99),
    Color::from_rgb8(0x84, 0xcc, 0x16),
];

pub const TEXT_COLOR: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
pub const MUTED_TEXT_COLOR: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
pub const GRID_COLOR: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
pub const BASELINE_COLOR: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
pub const PANEL_COLOR: Color = Color::from_rgb8(0xf9, 0xfa, 0xfb);
pub const ERROR_COLOR: Color = Color::from_rgb8(0xdc, 0x26, 0x26);
pub const TOOLTIP_BACKGROUND: Color = Color::from_rgb8(0x11, 0x18, 0x27);
pub const TOOLTIP_TEXT_COLOR: Color = Color::from_rgb8(0xff, 0xff, 0xff);
pub const POINT_OUTLINE_COLOR: Color = Color::from_rgb8(0xff, 0xff, 0xff);

/// Accent color keyed by the dashboard role viewing the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleAccent {
    Admin,
    Manager,
    Member,
    Custom(Color),
}

impl RoleAccent {
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Admin => Color::from_rgb8(0x7c, 0x3a, 0xed),
            Self::Manager => Color::from_rgb8(0x05, 0x96, 0x69),
            Self::Member => Color::from_rgb8(0x25, 0x63, 0xeb),
            Self::Custom(color) => color,
        }
    }
}

/// Ordered palette with deterministic cyclic lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Returns `None` for an empty color list.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self(colors))
        }
    }

    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        match self.0.len() {
            0 => DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()],
            len => self.0[index % len],
        }
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_PALETTE.to_vec())
    }
}
