//! Domain Error Types
//!
//! Pure domain errors that don't depend on storage or presentation.

use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors
///
/// These errors represent ledger-operation misuse and data-integrity
/// failures. They are independent of the persistence layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Category key has no entry in the price list
    #[error("Unknown ticket category: {0}")]
    UnknownCategory(String),

    /// Quantity must be strictly positive
    #[error("Invalid quantity: must be greater than zero")]
    InvalidQuantity,

    /// A sale with this id is already in the ledger
    #[error("Duplicate sale id: {0}")]
    DuplicateId(Uuid),

    /// No sale with this id is in the ledger
    #[error("Sale not found: {0}")]
    NotFound(Uuid),
}

impl LedgerError {
    /// Check if this is a user-recoverable error (surfaced as a
    /// notification, operation aborted, state unchanged).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::DuplicateId(_) | Self::NotFound(_))
    }

    /// Check if this is a data-integrity error that validation should have
    /// prevented (treated as fatal by callers).
    pub fn is_integrity_error(&self) -> bool {
        matches!(self, Self::UnknownCategory(_) | Self::InvalidQuantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_client_error() {
        let err = LedgerError::NotFound(Uuid::nil());
        assert!(err.is_client_error());
        assert!(!err.is_integrity_error());
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_unknown_category_is_integrity_error() {
        let err = LedgerError::UnknownCategory("palco".to_string());
        assert!(err.is_integrity_error());
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("palco"));
    }
}
