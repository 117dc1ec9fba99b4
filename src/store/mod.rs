//! Persistence adapter
//!
//! Durable storage of the ledger and summary across sessions: a single
//! named record in a key-value fashion. Malformed stored content is never a
//! parse error for the caller; the record is discarded and the session
//! starts empty.

pub mod json_file;
pub mod memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Sale;
use crate::summary::Summary;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// The persisted record: all sales, the summary at save time, and a
/// timestamp. The summary is stored for record-shape fidelity but is
/// rebuilt from the sales on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub sales: Vec<Sale>,

    #[serde(rename = "resumen")]
    pub summary: Summary,

    pub timestamp: DateTime<Utc>,
}

impl PersistedState {
    pub fn new(sales: Vec<Sale>, summary: Summary) -> Self {
        Self {
            sales,
            summary,
            timestamp: Utc::now(),
        }
    }
}

/// Storage failures. Terminal for the triggering save or load; the session
/// keeps working from memory.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Boundary for durable storage of the session state.
pub trait Store {
    /// Serialize the state to the named record, replacing any prior one.
    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError>;

    /// Load the named record. Returns `None` when no record exists or when
    /// the stored content is malformed (the corrupt record is discarded).
    fn load(&mut self) -> Result<Option<PersistedState>, StorageError>;

    /// Delete the named record.
    fn clear(&mut self) -> Result<(), StorageError>;
}
