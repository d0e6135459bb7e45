use crate::shared::icons::icon;
use contracts::shared::stats_query::Query;
use leptos::prelude::*;

const UNSUPPORTED_QUERY: &str = "unsupported_query";
const DEFAULT_MESSAGE: &str = "Imported data is excluded due to applied filters";

/// Warning is shown once the report has loaded and the API reports that imported
/// data could not be merged for this query.
pub fn should_show_imported_warning(
    loading: bool,
    query: &Query,
    skip_imported_reason: Option<&str>,
) -> bool {
    !loading
        && query.with_imported
        && !query.is_realtime()
        && skip_imported_reason == Some(UNSUPPORTED_QUERY)
}

#[component]
pub fn ImportedQueryUnsupportedWarning(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] query: Signal<Query>,
    #[prop(into)] skip_imported_reason: Signal<Option<String>>,
    /// Tooltip text
    #[prop(optional, into)]
    message: Option<String>,
) -> impl IntoView {
    let message = message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

    let visible = move || {
        let is_loading = loading.get();
        let reason = skip_imported_reason.get();
        query.with(|q| should_show_imported_warning(is_loading, q, reason.as_deref()))
    };

    view! {
        <Show when=visible>
            <span class="imported-warning" title=message.clone()>
                {icon("alert-circle")}
            </span>
        </Show>
    }
}
