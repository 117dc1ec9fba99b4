//! Sale record
//!
//! One completed ticket transaction. The total is computed once at creation
//! from the unit-price snapshot and stored; later price-list changes never
//! alter a recorded sale.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, UnitPrice};

/// A recorded ticket sale.
///
/// Serialized field names match the stored record shape
/// (`nombre`, `categoria`, `cantidad`, `total`, `fecha`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier within a ledger
    pub id: Uuid,

    /// Customer name, trimmed
    #[serde(rename = "nombre")]
    pub customer_name: String,

    /// Ticket category
    #[serde(rename = "categoria")]
    pub category: Category,

    /// Number of tickets, always > 0
    #[serde(rename = "cantidad")]
    pub quantity: u32,

    /// Unit price snapshot taken when the sale was recorded
    #[serde(rename = "precioUnitario")]
    pub unit_price_at_sale: UnitPrice,

    /// quantity x unit_price_at_sale, fixed at creation
    pub total: Decimal,

    /// When the sale was recorded
    #[serde(rename = "fecha")]
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// Record a new sale with a fresh id and the current time.
    ///
    /// The caller is expected to have validated the inputs already; this
    /// constructor only snapshots the price and computes the total.
    pub fn record(
        customer_name: String,
        category: Category,
        quantity: u32,
        unit_price: UnitPrice,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name,
            category,
            quantity,
            unit_price_at_sale: unit_price,
            total: unit_price.times(quantity),
            created_at: Utc::now(),
        }
    }

    /// Check the stored-total invariant: total == quantity x unit price.
    pub fn is_consistent(&self) -> bool {
        self.total == self.unit_price_at_sale.times(self.quantity)
    }

    /// Display label for this sale's category.
    pub fn category_label(&self) -> &'static str {
        self.category.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn vip_price() -> UnitPrice {
        UnitPrice::new(dec!(50.00)).unwrap()
    }

    #[test]
    fn test_record_computes_total_once() {
        let sale = Sale::record("Ana Lopez".to_string(), Category::Vip, 2, vip_price());

        assert_eq!(sale.total, dec!(100.00));
        assert_eq!(sale.unit_price_at_sale, vip_price());
        assert!(sale.is_consistent());
    }

    #[test]
    fn test_record_generates_unique_ids() {
        let a = Sale::record("Ana".to_string(), Category::Vip, 1, vip_price());
        let b = Sale::record("Ana".to_string(), Category::Vip, 1, vip_price());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serde_uses_stored_field_names() {
        let sale = Sale::record("Luis Ruiz".to_string(), Category::General, 3, vip_price());
        let json = serde_json::to_value(&sale).unwrap();

        assert_eq!(json["nombre"], "Luis Ruiz");
        assert_eq!(json["categoria"], "generales");
        assert_eq!(json["cantidad"], 3);
        assert!(json["total"].is_string());
        assert!(json.get("fecha").is_some());
    }

    #[test]
    fn test_serde_round_trip() {
        let sale = Sale::record("José".to_string(), Category::Orchestra, 4, vip_price());
        let json = serde_json::to_string(&sale).unwrap();
        let back: Sale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sale);
    }
}
