use tracing::{debug, warn};

use crate::core::{ChartData, ChartPoint, ChartSeries, PointRef};

/// Name given to the implicit series wrapping a flat point list.
pub const DEFAULT_SERIES_NAME: &str = "Data";

/// Result of input normalization.
///
/// `Empty` is a regular outcome, not an error: callers route it to the
/// empty-state placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Empty,
    Ready(SeriesSet),
}

impl Normalized {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn series_set(&self) -> Option<&SeriesSet> {
        match self {
            Self::Empty => None,
            Self::Ready(set) => Some(set),
        }
    }
}

/// Canonical series list with at least one plottable point.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSet {
    series: Vec<ChartSeries>,
}

impl SeriesSet {
    #[must_use]
    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn is_multi_series(&self) -> bool {
        self.series.len() > 1
    }

    /// Series that take part in domain and layout computation.
    pub fn non_empty(&self) -> impl Iterator<Item = (usize, &ChartSeries)> {
        self.series
            .iter()
            .enumerate()
            .filter(|(_, series)| !series.is_empty())
    }

    /// Number of category slots, driven by the longest series.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.series
            .iter()
            .map(|series| series.points.len())
            .max()
            .unwrap_or(0)
    }

    /// Label of a category slot, taken from the first series that has it.
    #[must_use]
    pub fn category_label(&self, index: usize) -> Option<&str> {
        self.series
            .iter()
            .find_map(|series| series.points.get(index))
            .map(|point| point.label.as_str())
    }

    #[must_use]
    pub fn point(&self, target: PointRef) -> Option<&ChartPoint> {
        self.series
            .get(target.series_index)?
            .points
            .get(target.point_index)
    }
}

/// Resolves raw input into canonical series.
///
/// Flat point lists become one series named [`DEFAULT_SERIES_NAME`]. Points
/// with non-finite values are dropped. Absent input, or input where every
/// series ends up without points, yields [`Normalized::Empty`].
#[must_use]
pub fn normalize(input: Option<&ChartData>) -> Normalized {
    let Some(input) = input else {
        debug!("normalize: no input");
        return Normalized::Empty;
    };

    let series: Vec<ChartSeries> = match input {
        ChartData::Points(points) => vec![ChartSeries::new(
            DEFAULT_SERIES_NAME,
            finite_points(DEFAULT_SERIES_NAME, points),
        )],
        ChartData::Series(series) => series
            .iter()
            .map(|series| ChartSeries {
                name: series.name.clone(),
                points: finite_points(&series.name, &series.points),
                color: series.color,
            })
            .collect(),
    };

    if series.iter().all(ChartSeries::is_empty) {
        debug!(series_count = series.len(), "normalize: every series is empty");
        return Normalized::Empty;
    }

    Normalized::Ready(SeriesSet { series })
}

fn finite_points(series_name: &str, points: &[ChartPoint]) -> Vec<ChartPoint> {
    let kept: Vec<ChartPoint> = points
        .iter()
        .filter(|point| point.value.is_finite())
        .cloned()
        .collect();
    let dropped = points.len() - kept.len();
    if dropped > 0 {
        warn!(series = series_name, dropped, "dropping non-finite point values");
    }
    kept
}
