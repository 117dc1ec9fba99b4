//! Error handling module
//!
//! Crate-wide error type converging the per-layer taxonomies. The
//! presentation layer decides how each kind is surfaced: validation errors
//! as field messages, ledger errors as notifications, storage errors as a
//! warning while the in-memory state keeps working.

use crate::config::ConfigError;
use crate::domain::LedgerError;
use crate::store::StorageError;
use crate::validation::ValidationReport;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more form fields failed validation; no state was mutated
    #[error(transparent)]
    Validation(#[from] ValidationReport),

    /// Ledger operation failure (duplicate id, unknown sale, bad pricing input)
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Persistence failure; the in-memory state is unaffected
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Check if this is a user-recoverable error (a new user action may
    /// succeed; nothing internal went wrong).
    pub fn is_client_error(&self) -> bool {
        match self {
            AppError::Validation(_) => true,
            AppError::Ledger(e) => e.is_client_error(),
            AppError::Storage(_) | AppError::Config(_) => false,
        }
    }
}
