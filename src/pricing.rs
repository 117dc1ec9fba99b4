//! Pricing
//!
//! The fixed price table mapping each ticket category to its unit price.
//! Immutable for the lifetime of a session.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::{Category, LedgerError, UnitPrice};

/// Immutable mapping from category to unit price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceList {
    prices: BTreeMap<Category, UnitPrice>,
}

impl PriceList {
    /// Build a price list from explicit entries.
    pub fn new(prices: BTreeMap<Category, UnitPrice>) -> Self {
        Self { prices }
    }

    /// Whether the category has an entry in this price list.
    pub fn contains(&self, category: Category) -> bool {
        self.prices.contains_key(&category)
    }

    /// Look up the unit price for a category.
    ///
    /// # Errors
    /// - `LedgerError::UnknownCategory` if the category has no entry
    pub fn price_of(&self, category: Category) -> Result<UnitPrice, LedgerError> {
        self.prices
            .get(&category)
            .copied()
            .ok_or_else(|| LedgerError::UnknownCategory(category.key().to_string()))
    }

    /// Compute the total for `quantity` tickets of `category`.
    ///
    /// # Errors
    /// - `LedgerError::UnknownCategory` if the category has no entry
    /// - `LedgerError::InvalidQuantity` if quantity is zero
    pub fn compute_total(&self, category: Category, quantity: u32) -> Result<Decimal, LedgerError> {
        let price = self.price_of(category)?;
        if quantity == 0 {
            return Err(LedgerError::InvalidQuantity);
        }
        Ok(price.times(quantity))
    }
}

impl Default for PriceList {
    /// The standard price table: VIP 50.00, orchestra 30.00, general 15.00.
    fn default() -> Self {
        let mut prices = BTreeMap::new();
        prices.insert(Category::Vip, unit_price("50.00"));
        prices.insert(Category::Orchestra, unit_price("30.00"));
        prices.insert(Category::General, unit_price("15.00"));
        Self { prices }
    }
}

fn unit_price(raw: &str) -> UnitPrice {
    UnitPrice::from_str(raw).expect("Invalid default price constant")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_prices() {
        let prices = PriceList::default();
        assert_eq!(prices.price_of(Category::Vip).unwrap().value(), dec!(50.00));
        assert_eq!(
            prices.price_of(Category::Orchestra).unwrap().value(),
            dec!(30.00)
        );
        assert_eq!(
            prices.price_of(Category::General).unwrap().value(),
            dec!(15.00)
        );
    }

    #[test]
    fn test_compute_total() {
        let prices = PriceList::default();
        assert_eq!(
            prices.compute_total(Category::Vip, 2).unwrap(),
            dec!(100.00)
        );
        assert_eq!(
            prices.compute_total(Category::General, 3).unwrap(),
            dec!(45.00)
        );
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let prices = PriceList::default();
        let result = prices.compute_total(Category::Vip, 0);
        assert_eq!(result, Err(LedgerError::InvalidQuantity));
    }

    #[test]
    fn test_missing_category_rejected() {
        let prices = PriceList::new(BTreeMap::new());
        let result = prices.price_of(Category::Vip);
        assert_eq!(
            result,
            Err(LedgerError::UnknownCategory("vip".to_string()))
        );
    }
}
