//! UnitPrice type
//!
//! Domain primitive for ticket prices. Prices are validated at construction
//! time, ensuring a negative price cannot exist in the system.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// UnitPrice represents the validated price of a single ticket.
///
/// # Invariants
/// - Value is never negative (zero is allowed for free tiers)
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use taquilla::domain::UnitPrice;
///
/// let price = UnitPrice::new(Decimal::new(5000, 2)).unwrap();
/// assert_eq!(price.value(), Decimal::new(5000, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct UnitPrice(Decimal);

/// Errors that can occur when creating a UnitPrice
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("Price must not be negative (got {0})")]
    Negative(Decimal),

    #[error("Invalid price format: {0}")]
    ParseError(String),
}

impl UnitPrice {
    /// Create a new UnitPrice with validation.
    ///
    /// # Errors
    /// - `PriceError::Negative` if value < 0
    pub fn new(value: Decimal) -> Result<Self, PriceError> {
        if value < Decimal::ZERO {
            return Err(PriceError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Total for `quantity` tickets at this price.
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for UnitPrice {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s).map_err(|e| PriceError::ParseError(e.to_string()))?;
        UnitPrice::new(decimal)
    }
}

impl TryFrom<Decimal> for UnitPrice {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        UnitPrice::new(value)
    }
}

impl From<UnitPrice> for Decimal {
    fn from(price: UnitPrice) -> Self {
        price.0
    }
}
