//! # localStorage-backed session storage — browser persistence
//!
//! [`LocalStorage`] is the [`SessionStorage`] implementation used on the
//! **web platform**. It persists the session keys into the browser's
//! `window.localStorage`, so the session survives a page reload and every
//! open view reads the same values.
//!
//! ## Connection management
//!
//! `LocalStorage` is a zero-size struct (`Clone`-friendly) that looks up the
//! storage object on every operation. The browser hands out the same
//! underlying storage each time, so there is nothing to cache.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! "logged out" rather than crashing; the server remains the authority on
//! who is actually authenticated.

use crate::storage::SessionStorage;

/// `window.localStorage` adapter used on the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backing() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backing()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::backing() {
            let _ = storage.clear();
        }
    }
}
