use crate::domain::errors::{AppError, AppResult};
use crate::domain::portfolio::KeyValueStore;
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::JsValue;

/// `window.localStorage`, looked up on every call so a missing or blocked
/// storage surfaces as an error instead of a panic.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> AppResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::Storage("window is not available".to_string()))?;
        window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))
    }
}

fn js_err(e: JsValue) -> AppError {
    AppError::Storage(format!("{:?}", e))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage()?.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.storage()?.remove_item(key).map_err(js_err)
    }
}

/// In-memory store for tests and for environments without `localStorage`
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
