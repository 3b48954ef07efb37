use serde::{Deserialize, Serialize};

use crate::core::{ChartData, Normalized, SeriesSet};

/// Per-render inputs supplied by the data-fetching collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartProps {
    pub data: Option<ChartData>,
    pub loading: bool,
    /// Fetch failure text, shown verbatim.
    pub error: Option<String>,
    /// Forces the empty placeholder even when data is present.
    pub empty: bool,
}

impl ChartProps {
    #[must_use]
    pub fn with_data(data: impl Into<ChartData>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Render-state of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartState {
    Loading,
    Error,
    Empty,
    Ready,
}

pub(super) enum ResolvedState<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Ready(&'a SeriesSet),
}

impl<'a> ResolvedState<'a> {
    /// `loading` wins over `error`, which wins over emptiness.
    pub(super) fn resolve(props: &'a ChartProps, normalized: &'a Normalized) -> Self {
        if props.loading {
            return Self::Loading;
        }
        if let Some(message) = props.error.as_deref() {
            return Self::Error(message);
        }
        if props.empty {
            return Self::Empty;
        }
        match normalized {
            Normalized::Empty => Self::Empty,
            Normalized::Ready(set) => Self::Ready(set),
        }
    }

    pub(super) fn state(&self) -> ChartState {
        match self {
            Self::Loading => ChartState::Loading,
            Self::Error(_) => ChartState::Error,
            Self::Empty => ChartState::Empty,
            Self::Ready(_) => ChartState::Ready,
        }
    }
}
