//! Key-Value Storage
//!
//! Browser local storage behind a small trait so persistence logic can be
//! tested with an in-memory map.

use crate::error::{js_error, UiError};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// `window.localStorage`
#[derive(Clone)]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// None when storage is disabled (private mode, sandboxed iframe)
    pub fn open() -> Option<Self> {
        let inner = web_sys::window()?.local_storage().ok()??;
        Some(Self { inner })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| UiError::Storage(format!("{}: {}", key, js_error(e))))
    }
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store for tests; can be told to reject writes
    #[derive(Default)]
    pub struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        full: bool,
    }

    impl MemoryStore {
        /// Store whose writes all fail, like a full quota
        pub fn full() -> Self {
            Self { full: true, ..Self::default() }
        }

        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.values.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
            if self.full {
                return Err(UiError::Storage("quota exceeded".to_string()));
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
