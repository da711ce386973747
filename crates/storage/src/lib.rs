//! `parkshell-storage` — origin-scoped key-value persistence.
//!
//! The browser hands session persistence to the shell as origin-scoped
//! `localStorage`. This crate abstracts that surface behind [`KeyValueStore`]
//! so the session layer can run against real `localStorage` on wasm targets,
//! a per-key file store on native targets, and an in-memory map in tests.

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod file;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::{FileStore, default_data_dir};
pub use memory::MemoryStore;

/// Synchronous string key-value store.
///
/// All operations are synchronous: the shell runs on the single UI thread
/// and the underlying stores (localStorage, small local files) complete
/// inline. Backend I/O failures surface as errors; absence of a key is not
/// an error.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove the entry under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        (**self).remove(key)
    }
}
