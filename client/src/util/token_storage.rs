//! Browser `localStorage` access for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens are stored as raw strings under [`forms::TOKEN_STORAGE_KEY`], not
//! JSON, so other scripts on the origin can read them as-is. Off the browser
//! every read misses and every write is dropped.

/// Read the raw value stored under `key`.
pub fn load(key: &str) -> Option<String> {
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

/// Store `value` under `key`, replacing any previous value.
pub fn save(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; token for {key} not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage rejected write for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove whatever is stored under `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
