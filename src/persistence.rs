// File: src/persistence.rs
use crate::error::StoreError;
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// A string-to-string store that survives restarts. The board keeps two keys
/// in it: the custom symbol library and the color-coding preference.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Process-local store, used by tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// The on-disk state of a `FileStore`.
#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
struct SerializableState {
    entries: BTreeMap<String, String>,
}

/// Store backed by a single file, rewritten atomically on every change.
pub struct FileStore {
    path: PathBuf,
    state: SerializableState,
}

impl FileStore {
    /// Opens the store at `path`. A missing or unreadable file opens empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match load_from_disk(&path) {
            Ok(state) => state,
            Err(e) if path.exists() => {
                warn!(path = %path.display(), error = %e, "store file is unreadable, starting empty");
                SerializableState::default()
            }
            Err(_) => {
                debug!(path = %path.display(), "no store file yet");
                SerializableState::default()
            }
        };
        Self { path, state }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        save_to_disk(&self.state, &self.path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.state.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.state.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.state.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

fn save_to_disk(state: &SerializableState, path: &Path) -> Result<(), StoreError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, state)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    Ok(())
}

fn load_from_disk(path: &Path) -> Result<SerializableState, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v".to_string()).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("board_store.bin");

        let mut store = FileStore::open(&path);
        store.set("colorCodingEnabled", "true".to_string()).unwrap();
        store.set("customSymbols", "{}".to_string()).unwrap();
        store.remove("customSymbols").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("colorCodingEnabled").as_deref(), Some("true"));
        assert_eq!(reopened.get("customSymbols"), None);
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board_store.bin");
        fs::write(&path, [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]).unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("customSymbols"), None);
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.bin"));
        assert_eq!(store.get("anything"), None);
    }
}
