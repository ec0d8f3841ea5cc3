// Thin JSON wrapper over window.localStorage
use serde::de::DeserializeOwned;
use web_sys::Storage;

use crate::util::cwarn;

fn local_storage() -> Option<Storage> {
    let win = web_sys::window()?;
    if let Ok(Some(store)) = win.local_storage() {
        return Some(store);
    }
    None
}

pub fn load_raw(key: &str) -> Option<String> {
    let store = local_storage()?;
    if let Ok(Some(raw)) = store.get_item(key) {
        if !raw.is_empty() {
            return Some(raw);
        }
    }
    None
}

/// Reads and parses `key`. Missing keys and malformed JSON both yield `None`;
/// the latter is logged.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            cwarn(&format!("storage.load parse failed for {key}: {e}"));
            None
        }
    }
}
