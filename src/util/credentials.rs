//! Credential store capability read by the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the auth token into browser `localStorage`; route
//! guards only ever read it. The store is injected into the evaluator so tests
//! can swap in [`MemoryStore`] instead of touching browser state.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Key the login flow stores the auth token under.
pub const DEFAULT_TOKEN_KEY: &str = "authToken";

/// Read-only view over a key-value credential store.
pub trait CredentialStore: Send + Sync {
    /// Return the raw value stored for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// Browser `localStorage` backend.
///
/// Outside the `hydrate` build there is no browser, so every lookup is `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl CredentialStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }
}

/// In-process store used by tests and non-browser integrators.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding a single `key` → `value` pair.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }

    /// Stand-in for the external login flow writing a token.
    pub fn set(&self, key: &str, value: &str) {
        self.values.write().unwrap_or_else(PoisonError::into_inner).insert(key.to_owned(), value.to_owned());
    }

    pub fn remove(&self, key: &str) {
        self.values.write().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }
}

/// Whether `raw` counts as a present token. Empty strings do not.
#[must_use]
pub fn token_present(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| !value.is_empty())
}
