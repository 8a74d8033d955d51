//! # Browser `localStorage` backend
//!
//! [`WebStorage`] is the [`KeyValueBackend`] used on the **web platform**. It
//! maps directly onto `window.localStorage`, which is where the portal has
//! always kept its per-role tokens, so an existing logged-in browser keeps its
//! session across a deploy of this client.
//!
//! ## Error handling
//!
//! All operations silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to "never
//! logged in" rather than crashing the view; the server remains the authority
//! on whether a token is valid anyway.

use crate::session::KeyValueBackend;

/// `localStorage`-backed store, zero-size and freely cloneable.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueBackend for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
