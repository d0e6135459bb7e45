use crate::dashboards::DevicesPanel;
use crate::layout::filter_bar::FilterBar;
use crate::layout::global_context::{
    current_search, query_from_search, read_site_domain, StatsContext,
};
use crate::shared::preferences::LocalStoragePreferences;
use contracts::shared::stats_query::DrilldownFilter;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let Some(domain) = read_site_domain() else {
        log::error!("No data-domain attribute on #stats-container or <body>");
        return view! {
            <div class="stats-error">"Site is not configured"</div>
        }
        .into_any();
    };

    // Provide the dashboard query to the whole app via context.
    let ctx = StatsContext::new(query_from_search(&current_search()));
    ctx.init_history_listener();
    provide_context(ctx);

    let on_drilldown = Callback::new(move |filter: DrilldownFilter| ctx.apply_drilldown(&filter));

    view! {
        <div class="stats-dashboard">
            <FilterBar />
            <DevicesPanel
                domain=domain
                query=ctx.query
                store=LocalStoragePreferences
                on_drilldown=on_drilldown
            />
        </div>
    }
    .into_any()
}
