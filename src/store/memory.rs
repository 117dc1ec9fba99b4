//! In-memory store
//!
//! Keeps the record in process memory. Used by tests and by embedders that
//! don't want a disk record.

use super::{PersistedState, StorageError, Store};

/// Store backed by an in-process record.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<PersistedState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current record, if any.
    pub fn record(&self) -> Option<&PersistedState> {
        self.record.as_ref()
    }
}

impl Store for MemoryStore {
    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError> {
        self.record = Some(state.clone());
        Ok(())
    }

    fn load(&mut self) -> Result<Option<PersistedState>, StorageError> {
        Ok(self.record.clone())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.record = None;
        Ok(())
    }
}
