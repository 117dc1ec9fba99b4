//! Sale Ledger
//!
//! The ordered collection of recorded sales. Insertion order is preserved
//! for display. The ledger itself is pure state; the summary recompute and
//! persistence side effects that must follow every mutation are driven by
//! the owning [`Session`](crate::session::Session).

use uuid::Uuid;

use crate::domain::{LedgerError, Sale};

/// Ordered sequence of sales, unique by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    sales: Vec<Sale>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously persisted sales.
    pub fn from_sales(sales: Vec<Sale>) -> Self {
        Self { sales }
    }

    /// Append a sale at the end.
    ///
    /// # Errors
    /// - `LedgerError::DuplicateId` if a sale with the same id exists
    pub fn append(&mut self, sale: Sale) -> Result<(), LedgerError> {
        if self.sales.iter().any(|s| s.id == sale.id) {
            return Err(LedgerError::DuplicateId(sale.id));
        }
        self.sales.push(sale);
        Ok(())
    }

    /// Remove and return the sale with the given id.
    ///
    /// # Errors
    /// - `LedgerError::NotFound` if no sale has that id
    pub fn remove(&mut self, id: Uuid) -> Result<Sale, LedgerError> {
        let index = self
            .sales
            .iter()
            .position(|s| s.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        Ok(self.sales.remove(index))
    }

    /// Empty the ledger unconditionally.
    pub fn clear(&mut self) {
        self.sales.clear();
    }

    /// Read-only snapshot of all sales in insertion order.
    pub fn all(&self) -> &[Sale] {
        &self.sales
    }

    /// Look up a sale by id without removing it.
    pub fn get(&self, id: Uuid) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}
