//! Summary Aggregator
//!
//! Derived per-category and grand totals over the current ledger, updated
//! incrementally on every mutation. The summary is a pure read model; the
//! ledger is the source of truth and a full recompute must always agree
//! with the incrementally maintained state.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Category, Sale};

/// Ticket count and revenue for one bucket. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    #[serde(rename = "cantidad")]
    pub count: u64,

    #[serde(rename = "total")]
    pub revenue: Decimal,
}

impl CategoryTotals {
    fn add(&mut self, quantity: u32, total: Decimal) {
        self.count += u64::from(quantity);
        self.revenue += total;
    }

    fn subtract(&mut self, quantity: u32, total: Decimal) {
        let quantity = u64::from(quantity);
        assert!(
            self.count >= quantity && self.revenue >= total,
            "summary bucket out of sync with ledger (count {}, revenue {}, removing {} / {})",
            self.count,
            self.revenue,
            quantity,
            total
        );
        self.count -= quantity;
        self.revenue -= total;
    }
}

/// Per-category and grand totals.
///
/// Serializes to the stored record shape: one entry per category key plus
/// `totalGeneral`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(flatten)]
    categories: BTreeMap<Category, CategoryTotals>,

    #[serde(rename = "totalGeneral")]
    grand_total: CategoryTotals,
}

impl Summary {
    /// An empty summary with every known category at zero.
    pub fn new() -> Self {
        let categories = Category::ALL
            .iter()
            .map(|c| (*c, CategoryTotals::default()))
            .collect();
        Self {
            categories,
            grand_total: CategoryTotals::default(),
        }
    }

    /// Account for an appended sale.
    pub fn on_append(&mut self, sale: &Sale) {
        self.categories
            .entry(sale.category)
            .or_default()
            .add(sale.quantity, sale.total);
        self.grand_total.add(sale.quantity, sale.total);
    }

    /// Account for a removed sale.
    ///
    /// # Panics
    /// Panics if the removal would drive a count or revenue negative. That
    /// means the sale was never reflected in this summary, which is an
    /// internal consistency bug, not a recoverable condition.
    pub fn on_remove(&mut self, sale: &Sale) {
        let bucket = self
            .categories
            .get_mut(&sale.category)
            .unwrap_or_else(|| panic!("summary has no bucket for category {}", sale.category));
        bucket.subtract(sale.quantity, sale.total);
        self.grand_total.subtract(sale.quantity, sale.total);
    }

    /// Rebuild the whole summary by folding over the given sales. Used after
    /// loading persisted state, where the ledger is trusted over any
    /// persisted summary.
    pub fn recompute_from(sales: &[Sale]) -> Self {
        let mut summary = Self::new();
        for sale in sales {
            summary.on_append(sale);
        }
        summary
    }

    /// Reset every bucket and the grand total to zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Totals for one category. Categories without a bucket report zero.
    pub fn category(&self, category: Category) -> CategoryTotals {
        self.categories.get(&category).copied().unwrap_or_default()
    }

    /// Grand total over all categories.
    pub fn grand_total(&self) -> CategoryTotals {
        self.grand_total
    }

    /// Iterate over the per-category buckets in display order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, CategoryTotals)> + '_ {
        self.categories.iter().map(|(c, t)| (*c, *t))
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}
