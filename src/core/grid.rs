use serde::{Deserialize, Serialize};

use crate::core::primitives::approx_zero;
use crate::core::{ScaleDomain, value_to_offset};

pub const DEFAULT_GRID_STEPS: usize = 5;

/// One reference line across the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub value: f64,
    /// Offset along the value axis, measured from the domain minimum.
    pub position: f64,
    pub label: String,
    /// The zero line, drawn solid.
    pub is_baseline: bool,
}

/// Splits the domain into `step_count` equal intervals, both ends included.
///
/// A flat domain yields a single line. `step_count == 0` is treated as one
/// interval. A domain whose range overflows `f64` is split by interpolating
/// between its finite ends.
pub fn build_grid_lines(
    domain: ScaleDomain,
    axis_length: f64,
    step_count: usize,
    format: impl Fn(f64) -> String,
) -> Vec<GridLine> {
    if domain.is_flat() {
        return vec![grid_line(domain.min, domain, axis_length, &format)];
    }

    let steps = step_count.max(1);
    if !domain.range.is_finite() {
        return (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                let value = domain.min * (1.0 - t) + domain.max * t;
                let mut line = grid_line(value, domain, axis_length, &format);
                line.position = t * axis_length;
                line
            })
            .collect();
    }

    let step = domain.range / steps as f64;
    (0..=steps)
        .map(|i| {
            // Pin the last line to `max` so float drift never hides the top label.
            let value = if i == steps {
                domain.max
            } else {
                domain.min + step * i as f64
            };
            grid_line(value, domain, axis_length, &format)
        })
        .collect()
}

fn grid_line(
    value: f64,
    domain: ScaleDomain,
    axis_length: f64,
    format: &impl Fn(f64) -> String,
) -> GridLine {
    let value = if approx_zero(value) { 0.0 } else { value };
    GridLine {
        value,
        position: value_to_offset(value, domain, axis_length),
        label: format(value),
        is_baseline: value == 0.0,
    }
}
