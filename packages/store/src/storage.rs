//! Key/value storage abstraction for the client session.
//!
//! [`SessionStorage`] is the seam between the session layer and the platform:
//! the browser's `localStorage` on the web ([`crate::LocalStorage`], behind the
//! `web` feature) and an in-memory map everywhere else
//! ([`crate::MemoryStorage`]). Values are plain strings, so on the web the same
//! keys survive a page reload and every view reads the same session without
//! explicit propagation.

/// String key/value storage backing the session.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear(&self);
}
