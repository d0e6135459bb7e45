use super::dimension_view::DimensionView;
use super::imported_warning::ImportedQueryUnsupportedWarning;
use crate::dashboards::d402_devices::dimension::{Dimension, Mode};
use crate::dashboards::d402_devices::state::create_state;
use crate::shared::list_report::ListReport;
use crate::shared::preferences::PreferenceStore;
use contracts::dashboards::d402_devices::BreakdownResponse;
use contracts::shared::stats_query::{DrilldownFilter, Query};
use leptos::prelude::*;

/// Devices card: Browser / OS / Size tabs over one breakdown report
#[component]
pub fn DevicesPanel<S>(
    /// Site domain; scopes the API path and the stored tab
    #[prop(into)]
    domain: String,
    /// Dashboard query, owned by the caller
    #[prop(into)]
    query: Signal<Query>,
    /// Where the selected tab is persisted
    store: S,
    /// Called when a row is selected
    on_drilldown: Callback<DrilldownFilter>,
) -> impl IntoView
where
    S: PreferenceStore + Clone + Send + Sync + 'static,
{
    let state = create_state(&store, &domain);
    let mode = Memo::new(move |_| state.with(|s| s.mode));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let skip_imported_reason = Signal::derive(move || state.with(|s| s.skip_imported_reason.clone()));

    // Tab switches reset in switch_tab; query changes reset here
    Effect::new(move |previous: Option<()>| {
        query.track();
        if previous.is_some() {
            state.update(|s| s.begin_fetch());
        }
    });

    let after_fetch = Callback::new(move |response: BreakdownResponse| {
        state.update(|s| s.after_fetch(&response));
    });

    let switch_tab = {
        let domain = domain.clone();
        move |next: Mode| {
            let mut changed = false;
            state.update(|s| changed = s.switch_tab(&store, &domain, next));
            if changed {
                log::debug!("Devices tab for {} switched to {}", domain, next.as_str());
            }
        }
    };

    let pills = Mode::all()
        .into_iter()
        .map(|pill| {
            let switch_tab = switch_tab.clone();
            move || {
                if mode.get() == pill {
                    view! {
                        <span class="devices-card__pill devices-card__pill--active">{pill.label()}</span>
                    }
                    .into_any()
                } else {
                    let switch_tab = switch_tab.clone();
                    view! {
                        <button class="devices-card__pill" on:click=move |_| switch_tab(pill)>
                            {pill.label()}
                        </button>
                    }
                    .into_any()
                }
            }
        })
        .collect_view();

    let content = move || {
        let current_query = query.get();
        let dimension = Dimension::resolve(mode.get(), &current_query);
        let source = DimensionView {
            dimension,
            domain: domain.clone(),
            query: current_query,
        };
        view! {
            <ListReport source=source after_fetch=after_fetch on_drilldown=on_drilldown />
        }
    };

    view! {
        <div class="devices-card">
            <div class="devices-card__header">
                <div class="devices-card__title">
                    <h3>"Devices"</h3>
                    <ImportedQueryUnsupportedWarning
                        loading=loading
                        query=query
                        skip_imported_reason=skip_imported_reason
                    />
                </div>
                <div class="devices-card__pills">{pills}</div>
            </div>
            {content}
        </div>
    }
}
