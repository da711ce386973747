//! File-backed store for native targets.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;

use crate::KeyValueStore;

/// One-file-per-key store rooted at a local data directory.
///
/// This is the native stand-in for the browser's `localStorage`: each key
/// maps to `{root}/{key}.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open the store at the platform's default data directory,
    /// creating it if needed.
    pub fn open_default() -> anyhow::Result<Self> {
        let root = default_data_dir()?;
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create data directory at {:?}", root))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match fs::read(self.entry_path(key)) {
            // Entries are text. Non-UTF-8 bytes decode lossily so a mangled
            // entry surfaces as corrupt content (parsed, rejected, purged)
            // instead of a read error that re-triggers on every start.
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read storage entry '{key}'"))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create data directory at {:?}", self.root))?;
        fs::write(self.entry_path(key), value)
            .with_context(|| format!("failed to write storage entry '{key}'"))
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to remove storage entry '{key}'"))
            }
        }
    }
}

/// Resolve the data directory for persisted shell state:
/// `{app_data_dir}/parkshell`.
pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    let mut dir = base;
    dir.push("parkshell");
    Ok(dir)
}
