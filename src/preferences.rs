//! Preference Store
//!
//! Durable key-value storage for user preferences. `localStorage` when the
//! browser allows it, an in-memory map otherwise.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("write failed for {0}")]
    WriteFailed(String),
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Session-only store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Fails when storage is disabled (private mode, sandboxed iframes).
    pub fn open() -> Result<Self, StoreError> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .map(|storage| Self { storage })
            .ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StoreError::WriteFailed(key.to_string()))
    }
}

/// Whichever store the browser could give us
pub enum BrowserStore {
    Local(LocalStorageStore),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match LocalStorageStore::open() {
            Ok(store) => BrowserStore::Local(store),
            Err(err) => {
                log::warn!("{}, preferences will not persist", err);
                BrowserStore::Memory(MemoryStore::default())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(store) => store.get(key),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            BrowserStore::Local(store) => store.set(key, value),
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::default();
        assert_eq!(store.get("portfolio-theme"), None);
        store.set("portfolio-theme", "dark").unwrap();
        assert_eq!(store.get("portfolio-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_shared_store_sees_writes() {
        let store = Rc::new(MemoryStore::default());
        let writer = Rc::clone(&store);
        writer.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
