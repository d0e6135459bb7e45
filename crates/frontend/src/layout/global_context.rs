use crate::shared::api_utils::query_string;
use contracts::shared::stats_query::{DrilldownFilter, Query, StatsQueryParams};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

const STATS_CONTAINER_ID: &str = "stats-container";

/// Dashboard-wide state shared through context
#[derive(Clone, Copy)]
pub struct StatsContext {
    pub query: RwSignal<Query>,
}

impl StatsContext {
    pub fn new(query: Query) -> Self {
        Self {
            query: RwSignal::new(query),
        }
    }

    /// Narrows the query to the selected row and records it in history.
    pub fn apply_drilldown(&self, drilldown: &DrilldownFilter) {
        let next = self.query.with_untracked(|q| q.with_drilldown(drilldown));
        log::debug!("Drill-down on {}: {:?}", drilldown.prefix, drilldown.filter);
        self.navigate(next);
    }

    pub fn remove_filter(&self, key: &str) {
        let next = self.query.with_untracked(|q| q.without_filter(key));
        self.navigate(next);
    }

    fn navigate(&self, next: Query) {
        push_query_to_history(&next);
        self.query.set(next);
    }

    /// Back/forward buttons restore the query from the URL.
    pub fn init_history_listener(&self) {
        let Some(w) = window() else {
            return;
        };
        let query = self.query;
        let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            query.set(query_from_search(&current_search()));
        }) as Box<dyn FnMut(_)>);

        let _ = w.add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref());
        handler.forget();
    }
}

/// Site domain from `data-domain` on the stats container, falling back to `<body>`.
pub fn read_site_domain() -> Option<String> {
    let document = window()?.document()?;
    document
        .get_element_by_id(STATS_CONTAINER_ID)
        .and_then(|el| el.get_attribute("data-domain"))
        .or_else(|| document.body()?.get_attribute("data-domain"))
        .filter(|domain| !domain.trim().is_empty())
}

pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Query from a `location.search` string. Malformed input yields the default query.
pub fn query_from_search(search: &str) -> Query {
    let raw = search.trim_start_matches('?');
    if raw.is_empty() {
        return Query::default();
    }

    let parsed = serde_qs::from_str::<StatsQueryParams>(raw)
        .map_err(|e| e.to_string())
        .and_then(|params| params.into_query().map_err(|e| format!("{:#}", e)));

    match parsed {
        Ok(query) => query,
        Err(e) => {
            log::warn!("Ignoring malformed query string '{}': {}", raw, e);
            Query::default()
        }
    }
}

fn push_query_to_history(query: &Query) {
    let new_url = match query_string(&StatsQueryParams::from_query(query)) {
        Ok(qs) => format!("?{}", qs),
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    if current_search() == new_url {
        return;
    }
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&new_url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::stats_query::FilterClause;

    #[test]
    fn test_query_from_search() {
        assert_eq!(query_from_search(""), Query::default());
        assert_eq!(query_from_search("?"), Query::default());

        let expected = Query {
            period: "7d".to_string(),
            filters: vec![FilterClause::is("os", "Linux")],
            ..Query::default()
        };
        let qs = query_string(&StatsQueryParams::from_query(&expected)).unwrap();
        assert_eq!(query_from_search(&format!("?{}", qs)), expected);
    }

    #[test]
    fn test_query_from_search_malformed() {
        assert_eq!(
            query_from_search("?period=7d&filters=%5B%5B%22is%22"),
            Query::default()
        );
    }
}
