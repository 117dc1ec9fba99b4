//! Session context
//!
//! Owns the ledger, the summary and the store for one logical session of
//! use. All mutations flow through the session so the contract holds:
//! validate first, then mutate the ledger, then update the summary, then
//! ask the store to save, in that order. Nothing here is shared across
//! threads; one session serves one sequence of user actions.

use uuid::Uuid;

use crate::domain::Sale;
use crate::error::AppResult;
use crate::ledger::Ledger;
use crate::pricing::PriceList;
use crate::store::{PersistedState, Store};
use crate::summary::Summary;
use crate::validation::SaleForm;

/// One ticket-sales session: prices, ledger, derived summary and the
/// persistence boundary.
#[derive(Debug)]
pub struct Session<S: Store> {
    prices: PriceList,
    ledger: Ledger,
    summary: Summary,
    store: S,
    unsaved: bool,
}

impl<S: Store> Session<S> {
    /// Open a session, restoring prior state from the store if a record
    /// exists. The summary is always rebuilt from the loaded sales; the
    /// ledger is the source of truth, and a persisted summary that
    /// disagrees with it is discarded.
    pub fn open(prices: PriceList, mut store: S) -> AppResult<Self> {
        let (ledger, summary) = match store.load()? {
            Some(state) => {
                let rebuilt = Summary::recompute_from(&state.sales);
                if rebuilt != state.summary {
                    tracing::warn!(
                        "persisted summary disagrees with ledger, keeping recomputed totals"
                    );
                }
                (Ledger::from_sales(state.sales), rebuilt)
            }
            None => (Ledger::new(), Summary::new()),
        };

        tracing::debug!(sales = ledger.len(), "session opened");

        Ok(Self {
            prices,
            ledger,
            summary,
            store,
            unsaved: false,
        })
    }

    /// Validate the raw form, price the sale, and record it.
    ///
    /// Validation failures mutate nothing. A storage failure after the
    /// mutation does not fail the operation: the sale stays in memory and
    /// [`has_unsaved_changes`](Self::has_unsaved_changes) reports it.
    pub fn record_sale(&mut self, form: &SaleForm) -> AppResult<Sale> {
        let valid = form.validate(&self.prices)?;
        let unit_price = self.prices.price_of(valid.category)?;

        let sale = Sale::record(valid.customer_name, valid.category, valid.quantity, unit_price);
        self.ledger.append(sale.clone())?;
        self.summary.on_append(&sale);
        self.persist();

        tracing::info!(
            id = %sale.id,
            customer = %sale.customer_name,
            category = %sale.category,
            quantity = sale.quantity,
            total = %sale.total,
            "sale recorded"
        );

        Ok(sale)
    }

    /// Remove a sale by id and return it. A second removal of the same id
    /// fails with `NotFound`.
    pub fn remove_sale(&mut self, id: Uuid) -> AppResult<Sale> {
        let sale = self.ledger.remove(id)?;
        self.summary.on_remove(&sale);
        self.persist();

        tracing::info!(id = %sale.id, customer = %sale.customer_name, "sale removed");
        Ok(sale)
    }

    /// Empty the ledger, reset the summary, and delete the stored record.
    pub fn clear_all(&mut self) {
        self.ledger.clear();
        self.summary.reset();

        match self.store.clear() {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to delete stored record");
                self.unsaved = true;
            }
        }

        tracing::info!("ledger cleared");
    }

    /// Read-only snapshot of all sales in insertion order.
    pub fn sales(&self) -> &[Sale] {
        self.ledger.all()
    }

    /// Read-only view of the derived totals.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// The price list this session sells at.
    pub fn prices(&self) -> &PriceList {
        &self.prices
    }

    /// Whether the latest state failed to reach the store. The in-memory
    /// ledger keeps working, but the presentation layer should warn that
    /// data may not survive a reload.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        let state = PersistedState::new(self.ledger.all().to_vec(), self.summary.clone());
        match self.store.save(&state) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                // Keep the in-memory state; the user keeps working.
                tracing::warn!(error = %e, "failed to save record, state kept in memory");
                self.unsaved = true;
            }
        }
    }
}
