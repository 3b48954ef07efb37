use serde::{Deserialize, Serialize};

use crate::core::{PathData, PointRef};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        let invalid = || ChartError::InvalidData(format!("invalid hex color `{input}`"));
        let channel = |range: std::ops::Range<usize>| -> ChartResult<u8> {
            let digits = hex.get(range).ok_or_else(invalid)?;
            u8::from_str_radix(digits, 16).map_err(|_| invalid())
        };

        match hex.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (i, slot) in rgb.iter_mut().enumerate() {
                    let nibble = channel(i..i + 1)?;
                    *slot = nibble * 17;
                }
                Ok(Self::from_rgb8(rgb[0], rgb[1], rgb[2]))
            }
            6 | 8 => {
                let base = Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?);
                if hex.len() == 8 {
                    Ok(base.with_alpha(f64::from(channel(6..8)?) / 255.0))
                } else {
                    Ok(base)
                }
            }
            _ => Err(invalid()),
        }
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
}

/// Horizontal text alignment relative to the text anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Semantic role of a primitive, for surfaces that style or layer by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveRole {
    Title,
    Subtitle,
    GridLine,
    AxisLabel,
    CategoryLabel,
    Bar,
    Area,
    Line,
    Point,
    LegendSwatch,
    LegendLabel,
    Tooltip,
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    /// Bars grow from the baseline.
    Grow,
    /// Strokes draw along their length.
    Draw,
    FadeIn,
    /// Continuous rotation, used by the loading marker.
    Spin,
}

/// What to animate and when; the rendering surface decides how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    pub kind: AnimationKind,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl AnimationDescriptor {
    #[must_use]
    pub const fn new(kind: AnimationKind, delay_ms: u32, duration_ms: u32) -> Self {
        Self {
            kind,
            delay_ms,
            duration_ms,
        }
    }
}

/// Paint attributes shared by every primitive shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub stroke_style: LineStrokeStyle,
    pub opacity: f64,
}

impl PrimitiveStyle {
    #[must_use]
    pub const fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            stroke_width: 0.0,
            stroke_style: LineStrokeStyle::Solid,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub const fn stroked(color: Color, stroke_width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width,
            stroke_style: LineStrokeStyle::Solid,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, color: Color, stroke_width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub const fn dashed(mut self) -> Self {
        self.stroke_style = LineStrokeStyle::Dashed;
        self
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "stroke width must be finite and > 0".to_owned(),
                ));
            }
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl RectShape {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineShape {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShape {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub h_align: TextHAlign,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Rect(RectShape),
    Path { path: PathData },
    Circle(CircleShape),
    Text(TextShape),
    Line(LineShape),
}

impl Shape {
    fn validate(&self) -> ChartResult<()> {
        let finite = |values: &[f64]| values.iter().all(|value| value.is_finite());
        match self {
            Self::Rect(rect) => {
                if !finite(&[rect.x, rect.y, rect.width, rect.height, rect.corner_radius]) {
                    return Err(ChartError::InvalidData(
                        "rect geometry must be finite".to_owned(),
                    ));
                }
                if rect.width < 0.0 || rect.height < 0.0 {
                    return Err(ChartError::InvalidData(
                        "rect size must be >= 0".to_owned(),
                    ));
                }
            }
            Self::Path { path } => {
                if !path.is_finite() {
                    return Err(ChartError::InvalidData(
                        "path coordinates must be finite".to_owned(),
                    ));
                }
            }
            Self::Circle(circle) => {
                if !finite(&[circle.cx, circle.cy, circle.radius]) || circle.radius < 0.0 {
                    return Err(ChartError::InvalidData(
                        "circle geometry must be finite with radius >= 0".to_owned(),
                    ));
                }
            }
            Self::Text(text) => {
                if text.text.is_empty() {
                    return Err(ChartError::InvalidData(
                        "text primitive must not be empty".to_owned(),
                    ));
                }
                if !finite(&[text.x, text.y]) {
                    return Err(ChartError::InvalidData(
                        "text coordinates must be finite".to_owned(),
                    ));
                }
                if !text.font_size_px.is_finite() || text.font_size_px <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "font size must be finite and > 0".to_owned(),
                    ));
                }
            }
            Self::Line(line) => {
                if !finite(&[line.x1, line.y1, line.x2, line.y2]) {
                    return Err(ChartError::InvalidData(
                        "line coordinates must be finite".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// One atomic drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPrimitive {
    pub role: PrimitiveRole,
    pub shape: Shape,
    pub style: PrimitiveStyle,
    /// Data point this primitive was derived from; activating it dispatches a click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<PointRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationDescriptor>,
}

impl DrawPrimitive {
    #[must_use]
    pub fn new(role: PrimitiveRole, shape: Shape, style: PrimitiveStyle) -> Self {
        Self {
            role,
            shape,
            style,
            origin: None,
            animation: None,
        }
    }

    #[must_use]
    pub fn rect(role: PrimitiveRole, rect: RectShape, style: PrimitiveStyle) -> Self {
        Self::new(role, Shape::Rect(rect), style)
    }

    #[must_use]
    pub fn path(role: PrimitiveRole, path: PathData, style: PrimitiveStyle) -> Self {
        Self::new(role, Shape::Path { path }, style)
    }

    #[must_use]
    pub fn circle(role: PrimitiveRole, circle: CircleShape, style: PrimitiveStyle) -> Self {
        Self::new(role, Shape::Circle(circle), style)
    }

    #[must_use]
    pub fn line(role: PrimitiveRole, line: LineShape, style: PrimitiveStyle) -> Self {
        Self::new(role, Shape::Line(line), style)
    }

    #[must_use]
    pub fn text(role: PrimitiveRole, text: TextShape, color: Color) -> Self {
        Self::new(role, Shape::Text(text), PrimitiveStyle::filled(color))
    }

    #[must_use]
    pub fn with_origin(mut self, origin: PointRef) -> Self {
        self.origin = Some(origin);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: Option<AnimationDescriptor>) -> Self {
        self.animation = animation;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.shape.validate()?;
        self.style.validate()
    }
}
