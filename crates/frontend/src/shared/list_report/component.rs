use super::metrics::Metric;
use super::traits::ReportSource;
use crate::shared::icons::icon;
use contracts::dashboards::d402_devices::{BreakdownResponse, ListItem};
use contracts::shared::stats_query::DrilldownFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thaw::{Spinner, SpinnerSize};

/// Rows requested for a dashboard card
pub const MAX_ITEMS: usize = 9;

/// Highest visitor count first; ties keep API order.
pub fn rank_rows(mut rows: Vec<ListItem>) -> Vec<ListItem> {
    rows.sort_by(|a, b| b.visitors.cmp(&a.visitors));
    rows
}

/// Background bar width, in percent of the top row
pub fn bar_width(visitors: u64, max_visitors: u64) -> f64 {
    if max_visitors == 0 {
        0.0
    } else {
        visitors as f64 / max_visitors as f64 * 100.0
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ReportState {
    Loading,
    Failed(String),
    Loaded(Vec<ListItem>),
}

/// Ranked list of breakdown rows with a bar per row and one column per metric.
///
/// Fetches once per mount. A response that arrives after the component was
/// unmounted (tab switch, new query) is dropped.
#[component]
pub fn ListReport<S>(
    /// Data source and per-row behavior
    source: S,
    /// Called with the raw response once rows are available
    after_fetch: Callback<BreakdownResponse>,
    /// Called with the row's filter when a clickable row is selected
    on_drilldown: Callback<DrilldownFilter>,
) -> impl IntoView
where
    S: ReportSource,
{
    let (state, set_state) = signal(ReportState::Loading);
    let key_label = source.key_label();
    let metrics = source.metrics();

    let mounted = Arc::new(AtomicBool::new(true));
    let mounted_for_cleanup = mounted.clone();
    on_cleanup(move || mounted_for_cleanup.store(false, Ordering::Relaxed));

    let source_for_fetch = source.clone();
    Effect::new(move |_| {
        let fetch = source_for_fetch.clone().fetch_data();
        let mounted = mounted.clone();
        spawn_local(async move {
            let result = fetch.await;
            if !mounted.load(Ordering::Relaxed) {
                log::debug!("Dropping {} response for an unmounted report", key_label);
                return;
            }
            match result {
                Ok(response) => {
                    set_state.set(ReportState::Loaded(rank_rows(response.results.clone())));
                    after_fetch.run(response);
                }
                Err(e) => {
                    log::error!("Failed to load {} report: {}", key_label, e);
                    set_state.set(ReportState::Failed(e));
                }
            }
        });
    });

    let header_metrics = metrics.clone();

    view! {
        <div class="list-report">
            <div class="list-report__header">
                <span class="list-report__key-label">{key_label}</span>
                {header_metrics
                    .into_iter()
                    .map(|metric| view! { <span class="list-report__metric-label">{metric.label()}</span> })
                    .collect_view()}
            </div>
            {move || match state.get() {
                ReportState::Loading => view! {
                    <div class="list-report__loading">
                        <Spinner size=SpinnerSize::Small />
                    </div>
                }
                .into_any(),
                ReportState::Failed(err) => view! {
                    <div class="list-report__error">"Failed to load data: " {err}</div>
                }
                .into_any(),
                ReportState::Loaded(rows) if rows.is_empty() => view! {
                    <div class="list-report__empty">"No data yet"</div>
                }
                .into_any(),
                ReportState::Loaded(rows) => {
                    let max_visitors = rows.first().map(|row| row.visitors).unwrap_or(0);
                    rows.into_iter()
                        .take(MAX_ITEMS)
                        .map(|item| render_row(&source, &metrics, item, max_visitors, on_drilldown))
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

fn render_row<S: ReportSource>(
    source: &S,
    metrics: &[Metric],
    item: ListItem,
    max_visitors: u64,
    on_drilldown: Callback<DrilldownFilter>,
) -> AnyView {
    let bar_style = format!("width: {:.1}%;", bar_width(item.visitors, max_visitors));
    let row_icon = source.render_icon(&item);
    let name = item.name.clone();

    let label = match source.filter_for(&item) {
        Some(filter) => view! {
            <button class="list-report__link" on:click=move |_| on_drilldown.run(filter.clone())>
                {name}
            </button>
        }
        .into_any(),
        None => view! { <span class="list-report__name">{name}</span> }.into_any(),
    };

    let cells = metrics
        .iter()
        .map(|metric| {
            let value = metric.format_value(&item);
            view! { <span class="list-report__metric">{value}</span> }
        })
        .collect_view();

    let change = item
        .comparison
        .as_ref()
        .and_then(|comparison| comparison.change)
        .map(|change| {
            let (arrow, class) = if change >= 0.0 {
                ("arrow-up", "list-report__change list-report__change--up")
            } else {
                ("arrow-down", "list-report__change list-report__change--down")
            };
            view! {
                <span class=class>{icon(arrow)}{format!("{}%", change.abs().round())}</span>
            }
        });

    view! {
        <div class="list-report__row">
            <div class="list-report__bar-container">
                <div class="list-report__bar" style=bar_style></div>
                <span class="list-report__label">{row_icon}{label}</span>
            </div>
            {cells}
            {change}
        </div>
    }
    .into_any()
}
