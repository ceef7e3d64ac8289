//! Thin typed wrapper over `window.localStorage`

use contracts::shared::storage_keys::{
    strip_token_quotes, AUTH_TOKEN, LOGIN_DATA, PROFILE_DATA, SEARCH_MODE, SEARCH_TITLE,
    SEARCH_VALUES,
};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Read a JSON value; a malformed entry is logged and treated as absent
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed '{}' in local storage: {}", key, e);
            None
        }
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => set_item(key, &raw),
        Err(e) => log::warn!("Failed to serialize '{}': {}", key, e),
    }
}

/// Session token with any JSON quoting removed
pub fn get_auth_token() -> Option<String> {
    strip_token_quotes(&get_item(AUTH_TOKEN)?)
}

/// Forget everything tied to the signed-in user
pub fn clear_session() {
    for key in [AUTH_TOKEN, LOGIN_DATA, PROFILE_DATA] {
        remove_item(key);
    }
}

/// Forget the last search so the next composer starts blank
pub fn clear_search() {
    for key in [SEARCH_VALUES, SEARCH_MODE, SEARCH_TITLE] {
        remove_item(key);
    }
}
