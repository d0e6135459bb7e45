use super::dimension::{tab_storage_key, Mode};
use crate::shared::preferences::PreferenceStore;
use contracts::dashboards::d402_devices::BreakdownResponse;
use leptos::prelude::*;

/// View state of the Devices card
#[derive(Clone, Debug, PartialEq)]
pub struct DevicesPanelState {
    pub mode: Mode,
    pub loading: bool,
    pub skip_imported_reason: Option<String>,
}

impl DevicesPanelState {
    /// Restores the selected tab of `domain`. Read once per mount.
    pub fn load(store: &impl PreferenceStore, domain: &str) -> Self {
        let stored = store.get_item(&tab_storage_key(domain));
        Self {
            mode: Mode::from_stored(stored.as_deref()),
            loading: true,
            skip_imported_reason: None,
        }
    }

    /// Persists `mode`, then makes it current.
    ///
    /// Returns `false` when `mode` was already active; nothing is written then.
    pub fn switch_tab(&mut self, store: &impl PreferenceStore, domain: &str, mode: Mode) -> bool {
        if self.mode == mode {
            return false;
        }
        store.set_item(&tab_storage_key(domain), mode.as_str());
        self.mode = mode;
        self.begin_fetch();
        true
    }

    /// A new view is about to fetch: back to loading, previous reason dropped.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.skip_imported_reason = None;
    }

    pub fn after_fetch(&mut self, response: &BreakdownResponse) {
        self.loading = false;
        self.skip_imported_reason = response.skip_imported_reason.clone();
    }
}

// Created within component scope so the state is disposed with the panel
pub fn create_state(store: &impl PreferenceStore, domain: &str) -> RwSignal<DevicesPanelState> {
    RwSignal::new(DevicesPanelState::load(store, domain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::preferences::MemoryPreferences;

    fn response_with_reason(reason: Option<&str>) -> BreakdownResponse {
        BreakdownResponse {
            results: Vec::new(),
            skip_imported_reason: reason.map(str::to_string),
        }
    }

    #[test]
    fn test_load_defaults_to_browser() {
        let store = MemoryPreferences::default();
        let state = DevicesPanelState::load(&store, "example.com");
        assert_eq!(state.mode, Mode::Browser);
        assert!(state.loading);
        assert_eq!(state.skip_imported_reason, None);
    }

    #[test]
    fn test_load_unknown_stored_value_falls_back_to_size() {
        let store = MemoryPreferences::default();
        store.set_item("deviceTab__example.com", "resolution");
        assert_eq!(DevicesPanelState::load(&store, "example.com").mode, Mode::Size);
    }

    #[test]
    fn test_load_empty_stored_value_is_browser() {
        let store = MemoryPreferences::default();
        store.set_item("deviceTab__example.com", "");
        assert_eq!(DevicesPanelState::load(&store, "example.com").mode, Mode::Browser);
    }

    #[test]
    fn test_switch_tab_persists_and_restores_per_site() {
        let store = MemoryPreferences::default();
        let mut state = DevicesPanelState::load(&store, "example.com");

        assert!(state.switch_tab(&store, "example.com", Mode::Os));
        assert_eq!(state.mode, Mode::Os);
        assert_eq!(
            store.get_item("deviceTab__example.com").as_deref(),
            Some("os")
        );

        // reload: mode comes from storage alone, no fetch involved
        let reloaded = DevicesPanelState::load(&store, "example.com");
        assert_eq!(reloaded.mode, Mode::Os);

        // other sites keep their own preference
        assert_eq!(DevicesPanelState::load(&store, "other.org").mode, Mode::Browser);
    }

    #[test]
    fn test_switch_to_active_tab_is_noop() {
        let store = MemoryPreferences::default();
        let mut state = DevicesPanelState::load(&store, "example.com");
        state.after_fetch(&response_with_reason(None));

        assert!(!state.switch_tab(&store, "example.com", Mode::Browser));
        assert!(!state.loading);
        assert_eq!(store.get_item("deviceTab__example.com"), None);
    }

    #[test]
    fn test_switch_tab_resets_loading() {
        let store = MemoryPreferences::default();
        let mut state = DevicesPanelState::load(&store, "example.com");
        state.after_fetch(&response_with_reason(Some("unsupported_query")));

        state.switch_tab(&store, "example.com", Mode::Size);
        assert!(state.loading);
        assert_eq!(state.skip_imported_reason, None);
    }

    #[test]
    fn test_after_fetch_then_query_change() {
        let store = MemoryPreferences::default();
        let mut state = DevicesPanelState::load(&store, "example.com");

        state.after_fetch(&response_with_reason(Some("unsupported_query")));
        assert!(!state.loading);
        assert_eq!(
            state.skip_imported_reason.as_deref(),
            Some("unsupported_query")
        );

        state.begin_fetch();
        assert!(state.loading);
        assert_eq!(state.skip_imported_reason, None);
        assert_eq!(state.mode, Mode::Browser);
    }
}
