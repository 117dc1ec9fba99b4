//! JSON file store
//!
//! Stores the session record as a single JSON file on disk, the local
//! key-value analog of the original browser storage. Writes go through a
//! temporary file and rename so a failed save never truncates the record.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{PersistedState, StorageError, Store};

/// File-backed store holding one named record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Store for JsonFileStore {
    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(state)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        tracing::debug!(path = %self.path.display(), sales = state.sales.len(), "record saved");
        Ok(())
    }

    fn load(&mut self) -> Result<Option<PersistedState>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                // Corrupt record: discard it and start empty.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "stored record is malformed, discarding"
                );
                self.clear()?;
                Ok(None)
            }
        }
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Sale, UnitPrice};
    use crate::summary::Summary;
    use rust_decimal_macros::dec;

    fn sample_state() -> PersistedState {
        let price = UnitPrice::new(dec!(50.00)).unwrap();
        let sale = Sale::record("Ana Lopez".to_string(), Category::Vip, 2, price);
        let summary = Summary::recompute_from(std::slice::from_ref(&sale));
        PersistedState::new(vec![sale], summary)
    }

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("taquilla.json"))
    }

    #[test]
    fn test_load_missing_record_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let state = sample_state();

        store.save(&state).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_save_replaces_prior_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.save(&sample_state()).unwrap();
        let empty = PersistedState::new(Vec::new(), Summary::new());
        store.save(&empty).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.sales.is_empty());
    }

    #[test]
    fn test_malformed_record_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        assert!(store.load().unwrap().is_none());
        // The corrupt file is gone too.
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.save(&sample_state()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested/data/taquilla.json"));

        store.save(&sample_state()).unwrap();
        assert!(store.load().unwrap().is_some());
    }
}
