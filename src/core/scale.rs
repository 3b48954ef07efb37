use serde::{Deserialize, Serialize};

use crate::core::ChartSeries;

/// Numeric value range a chart must represent.
///
/// Zero is always inside the domain so bars keep a visible baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleDomain {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl ScaleDomain {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            range: max - min,
        }
    }

    /// Computes the domain across every point of every series.
    ///
    /// Series without points are ignored. With no points at all the domain
    /// collapses to `{0, 0, 0}`.
    #[must_use]
    pub fn compute(series: &[ChartSeries]) -> Self {
        let (min, max) = series
            .iter()
            .flat_map(|series| series.points.iter())
            .map(|point| point.value)
            .filter(|value| value.is_finite())
            .fold((0.0_f64, 0.0_f64), |(min, max), value| {
                (min.min(value), max.max(value))
            });
        Self::new(min, max)
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.range == 0.0
    }

    /// Value bars grow from and areas close against.
    #[must_use]
    pub fn baseline(self) -> f64 {
        self.min.max(0.0).min(self.max)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Linearly maps `value` to an offset along an axis of `axis_length` pixels.
///
/// The offset is measured from the domain minimum. A flat domain maps every
/// value to the axis midpoint.
#[must_use]
pub fn value_to_offset(value: f64, domain: ScaleDomain, axis_length: f64) -> f64 {
    if domain.is_flat() || !domain.range.is_finite() {
        return axis_length / 2.0;
    }
    (value - domain.min) / domain.range * axis_length
}

/// Centre of the `index`-th of `count` items of `item_size` pixels spaced
/// `item_spacing` apart along `axis_length`.
///
/// The first and last items keep a half-spacing margin. When the items do
/// not fill the axis the whole run is centred.
#[must_use]
pub fn index_to_offset(
    index: usize,
    count: usize,
    axis_length: f64,
    item_size: f64,
    item_spacing: f64,
) -> f64 {
    if count == 0 {
        return axis_length / 2.0;
    }
    let pitch = item_size + item_spacing;
    let leftover = axis_length - pitch * count as f64;
    leftover / 2.0 + item_spacing / 2.0 + pitch * index as f64 + item_size / 2.0
}
