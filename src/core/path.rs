use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Orientation, PlotPoint};

/// One vector path command in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    Close,
}

impl PathCommand {
    fn points(self) -> [Option<(f64, f64)>; 2] {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => [Some((x, y)), None],
            Self::QuadTo { cx, cy, x, y } => [Some((cx, cy)), Some((x, y))],
            Self::Close => [None, None],
        }
    }
}

/// Ordered command list describing one path.
///
/// `Display` renders SVG path syntax (`M0.00,0.00 L10.00,5.00`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: PlotPoint) {
        self.commands.push(PathCommand::MoveTo {
            x: point.x,
            y: point.y,
        });
    }

    pub fn line_to(&mut self, point: PlotPoint) {
        self.commands.push(PathCommand::LineTo {
            x: point.x,
            y: point.y,
        });
    }

    pub fn quad_to(&mut self, control: PlotPoint, end: PlotPoint) {
        self.commands.push(PathCommand::QuadTo {
            cx: control.x,
            cy: control.y,
            x: end.x,
            y: end.y,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands
            .iter()
            .flat_map(|command| command.points())
            .flatten()
            .all(|(x, y)| x.is_finite() && y.is_finite())
    }

    #[must_use]
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo { x, y } => write!(f, "M{x:.2},{y:.2}")?,
                PathCommand::LineTo { x, y } => write!(f, "L{x:.2},{y:.2}")?,
                PathCommand::QuadTo { cx, cy, x, y } => {
                    write!(f, "Q{cx:.2},{cy:.2} {x:.2},{y:.2}")?;
                }
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Builds the stroke path through `points`.
///
/// Fewer than two points produce an empty path. In smooth mode every interior
/// point emits a quadratic curve whose control point is the midpoint of the
/// previous and current point and whose end is the midpoint of the current
/// and next point; the final segment is a straight line to the last point.
#[must_use]
pub fn build_line_path(points: &[PlotPoint], smooth: bool) -> PathData {
    let mut path = PathData::new();
    let [first, .., last] = points else {
        return path;
    };

    path.move_to(*first);
    if smooth {
        for window in points.windows(3) {
            let (prev, current, next) = (window[0], window[1], window[2]);
            path.quad_to(prev.midpoint(current), current.midpoint(next));
        }
        path.line_to(*last);
    } else {
        for point in &points[1..] {
            path.line_to(*point);
        }
    }
    path
}

/// Builds a closed fill region between the line through `points` and the
/// baseline.
///
/// `baseline` is a canvas y coordinate for vertical charts and a canvas x
/// coordinate for horizontal ones.
#[must_use]
pub fn build_area_path(
    points: &[PlotPoint],
    baseline: f64,
    orientation: Orientation,
    smooth: bool,
) -> PathData {
    let mut path = build_line_path(points, smooth);
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return path;
    };
    if path.is_empty() {
        return path;
    }

    let foot = |point: &PlotPoint| match orientation {
        Orientation::Vertical => PlotPoint::new(point.x, baseline),
        Orientation::Horizontal => PlotPoint::new(baseline, point.y),
    };
    path.line_to(foot(last));
    path.line_to(foot(first));
    path.close();
    path
}
