//! Browser `localStorage` store for wasm targets.

use anyhow::{Context, anyhow};
use web_sys::Storage;

use crate::KeyValueStore;

/// Thin wrapper over the browser's origin-scoped `localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> anyhow::Result<Storage> {
        web_sys::window()
            .context("no window object")?
            .local_storage()
            .map_err(|err| anyhow!("localStorage access denied: {err:?}"))?
            .context("localStorage unavailable")
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| anyhow!("failed to read storage entry '{key}': {err:?}"))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| anyhow!("failed to write storage entry '{key}': {err:?}"))
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| anyhow!("failed to remove storage entry '{key}': {err:?}"))
    }
}
