//! Persisted UI preferences.
//!
//! Components receive a [`PreferenceStore`] instead of touching `localStorage`
//! directly, so state logic can run against [`MemoryPreferences`] in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use web_sys::window;

/// Key-value store for small UI preferences
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Missing storage (private mode, no window) reads as empty
/// and silently drops writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreferences;

impl LocalStoragePreferences {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// In-memory store; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryPreferences {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }
}
