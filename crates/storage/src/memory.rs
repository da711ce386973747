use std::cell::RefCell;
use std::collections::HashMap;

use crate::KeyValueStore;

/// In-memory store.
///
/// Used by tests and as a fallback when no persistent backend is available;
/// contents vanish with the process, which matches a browser session with
/// storage disabled. Interior mutability is `RefCell` because the shell is
/// single-threaded (the UI event loop drives every access).
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let store = MemoryStore::new();
        store.set("vps_user", r#"{"role":"USER"}"#).unwrap();
        assert_eq!(
            store.get("vps_user").unwrap().as_deref(),
            Some(r#"{"role":"USER"}"#)
        );
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
