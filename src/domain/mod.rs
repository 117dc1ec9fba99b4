//! Domain module
//!
//! Core domain types and business logic.

pub mod category;
pub mod error;
pub mod price;
pub mod sale;

pub use category::{Category, ParseCategoryError};
pub use error::LedgerError;
pub use price::{PriceError, UnitPrice};
pub use sale::Sale;
