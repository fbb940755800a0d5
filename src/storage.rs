//! Browser Storage Backend
//!
//! `localStorage` behind the store's key-value trait. The storage object is
//! looked up on every call so the backend itself carries no JS handles.

use todo_store::{KeyValueStorage, StoreError, StoreResult};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn local_storage() -> StoreResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StoreError::Unavailable(js_error(e)))?
        .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(js_error(e)))
    }
}
