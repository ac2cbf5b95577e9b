//! Key-value stores for persisted settings: in memory and one file per key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::core::SettingsError;

/// Key-value storage for encoded settings entries.
pub trait SettingsStore {
    /// Raw bytes stored under `key`, if any.
    fn read(&self, key: &str) -> Option<Vec<u8>>;

    /// Store `value` under `key`, replacing any previous entry.
    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), SettingsError>;
}

/// In-memory store, for tests and hosts without disk access.
#[derive(Clone, Debug, Default)]
pub struct MemorySettingsStore {
    entries: FxHashMap<String, Vec<u8>>,
}

impl MemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw bytes under `key`, bypassing encoding.
    pub fn insert_raw(&mut self, key: impl Into<String>, bytes: Vec<u8>) {
        self.entries.insert(key.into(), bytes);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), SettingsError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// One file per key under a directory.
#[derive(Clone, Debug)]
pub struct FileSettingsStore {
    dir: PathBuf,
}

impl FileSettingsStore {
    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.bin"))
    }
}

impl SettingsStore for FileSettingsStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(key, error = %err, "settings entry unreadable");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemorySettingsStore::new();
        assert!(store.read("k").is_none());

        store.write("k", &[1, 2, 3]).unwrap();
        assert_eq!(store.read("k"), Some(vec![1, 2, 3]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_creates_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("word-rush").join("settings");
        let mut store = FileSettingsStore::with_dir(&nested);

        assert!(store.read("words").is_none());
        store.write("words", b"abc").unwrap();
        assert_eq!(store.read("words"), Some(b"abc".to_vec()));
        assert!(nested.join("words.bin").exists());
    }
}
