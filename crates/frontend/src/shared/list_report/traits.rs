use super::metrics::Metric;
use contracts::dashboards::d402_devices::{BreakdownResponse, ListItem};
use contracts::shared::stats_query::DrilldownFilter;
use leptos::prelude::AnyView;
use std::future::Future;

/// Everything a [`ListReport`](super::ListReport) needs to load and render one breakdown
pub trait ReportSource: Clone + Send + Sync + 'static {
    /// Header of the name column
    fn key_label(&self) -> &'static str;

    fn metrics(&self) -> Vec<Metric>;

    /// One read against the breakdown endpoint
    fn fetch_data(self) -> impl Future<Output = Result<BreakdownResponse, String>> + 'static;

    /// Filter applied when the row is clicked; `None` makes the row inert
    fn filter_for(&self, item: &ListItem) -> Option<DrilldownFilter>;

    fn render_icon(&self, _item: &ListItem) -> Option<AnyView> {
        None
    }
}
