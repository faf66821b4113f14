//! Key-value persistence for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign page reads the token on mount and writes it after a successful
//! submission. `App` provides a `SharedStorage` through context and pages read
//! it from there, so tests can substitute an in-memory map for `localStorage`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// String key-value store with durable semantics in the browser.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Storage capability as provided through Leptos context.
pub type SharedStorage = Arc<dyn SessionStorage + Send + Sync>;

/// `SessionStorage` over `window.localStorage`.
///
/// Every call is best-effort: a missing window or storage reads as absent
/// and writes are dropped. Outside the browser both are no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; dropping {key}");
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage write failed for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory `SessionStorage`; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }
}

/// Whether a non-empty session token is stored under `key`.
pub fn has_session<S: SessionStorage + ?Sized>(storage: &S, key: &str) -> bool {
    storage.get(key).is_some_and(|token| !token.is_empty())
}
