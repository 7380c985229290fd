use std::{cell::RefCell, collections::HashMap, sync::Arc};

use gloo::storage::{LocalStorage, Storage};
use log::warn;

/// The single key the session record lives under.
pub const SESSION_KEY: &str = "wallet-session";

/// Key-value storage that survives page reloads.
///
/// Writes are best-effort; a failed write is logged and the session carries on
/// with its in-memory state.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Session store backed by browser localStorage.
#[derive(Debug, Default, Clone)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for LocalSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            warn!("session store write failed: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            warn!("session store remove failed: {err:?}");
        }
    }
}

/// In-memory store, shared between clones. Used off-wasm and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: Arc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
