//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only web-sys glue so the session adapter and persisted
//! UI chrome share one read/write path. Outside the browser every read is
//! empty and every write is dropped.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

pub fn remove_item(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_item(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    set_item(key, &raw);
}
