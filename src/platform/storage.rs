//! String key/value storage
//!
//! Mirrors the browser `Storage` interface. Failures are reported through
//! the return value and never panic.

use std::collections::HashMap;

/// Minimal key/value store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// Returns false if the write was rejected
    fn set_item(&mut self, key: &str, value: &str) -> bool;
}

/// In-process store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> bool {
        self.items.insert(key.to_string(), value.to_string());
        true
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// None when storage is unavailable (private mode, sandboxed iframe)
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        match storage {
            Some(storage) => Some(Self { storage }),
            None => {
                log::warn!("LocalStorage unavailable, scores won't persist");
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) -> bool {
        self.storage.set_item(key, value).is_ok()
    }
}
