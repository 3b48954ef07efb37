use tracing::debug;

use crate::core::ChartData;
use crate::render::Renderer;

use super::{ChartEngine, ChartProps};

impl<R: Renderer> ChartEngine<R> {
    /// Replaces all props and normalizes the new data snapshot.
    pub fn set_props(&mut self, props: ChartProps) {
        self.props = props;
        self.renormalize();
        debug!(
            loading = self.props.loading,
            has_error = self.props.error.is_some(),
            state = ?self.state(),
            "set chart props"
        );
    }

    /// Replaces the data snapshot and leaves the loading/error flags.
    pub fn set_data(&mut self, data: impl Into<ChartData>) {
        self.props.data = Some(data.into());
        self.props.loading = false;
        self.props.error = None;
        self.renormalize();
        debug!(
            series_count = self.normalized.series_set().map_or(0, |set| set.len()),
            state = ?self.state(),
            "set chart data"
        );
    }

    pub fn clear_data(&mut self) {
        self.props.data = None;
        self.renormalize();
        debug!("cleared chart data");
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.props.loading = loading;
        debug!(loading, "set loading");
    }

    /// Sets or clears the fetch error shown in place of the chart.
    pub fn set_error(&mut self, error: Option<String>) {
        debug!(has_error = error.is_some(), "set error");
        self.props.error = error;
    }

    pub fn set_empty(&mut self, empty: bool) {
        self.props.empty = empty;
        debug!(empty, "set empty override");
    }
}
