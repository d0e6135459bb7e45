use crate::dashboards::d402_devices::api::fetch_breakdown;
use crate::dashboards::d402_devices::dimension::{metrics_for, Dimension, RowIcon};
use crate::shared::list_report::{Metric, ReportSource, MAX_ITEMS};
use contracts::dashboards::d402_devices::{BreakdownResponse, ListItem};
use contracts::shared::stats_query::{DrilldownFilter, Query};
use leptos::prelude::*;
use std::future::Future;

/// One mounted breakdown: a dimension bound to a site and a query snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionView {
    pub dimension: Dimension,
    pub domain: String,
    pub query: Query,
}

impl ReportSource for DimensionView {
    fn key_label(&self) -> &'static str {
        self.dimension.key_label()
    }

    fn metrics(&self) -> Vec<Metric> {
        metrics_for(&self.query)
    }

    fn fetch_data(self) -> impl Future<Output = Result<BreakdownResponse, String>> + 'static {
        fetch_breakdown(self.domain, self.dimension, self.query, MAX_ITEMS)
    }

    fn filter_for(&self, item: &ListItem) -> Option<DrilldownFilter> {
        self.dimension.filter_for(&self.query, item)
    }

    fn render_icon(&self, item: &ListItem) -> Option<AnyView> {
        self.dimension.row_icon(item).map(|row_icon| match row_icon {
            RowIcon::BrowserLogo(src) => view! {
                <img src=src class="device-icon device-icon--browser" alt="" />
            }
            .into_any(),
            RowIcon::ScreenGlyph(markup) => view! {
                <span class="device-icon device-icon--screen" inner_html=markup></span>
            }
            .into_any(),
        })
    }
}
