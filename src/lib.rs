//! taquilla
//!
//! A single-session ticket-sales ledger: raw form input is validated,
//! priced against a fixed price table, appended to an ordered ledger, and
//! per-category plus grand totals are kept as a derived summary. State is
//! persisted to a single local record and restored on open. Rendering and
//! event wiring belong to the embedding presentation layer; this crate
//! exposes read-only snapshots and human-readable error messages.

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod pricing;
pub mod session;
pub mod store;
pub mod summary;
pub mod validation;

pub use config::Config;
pub use domain::{Category, LedgerError, Sale, UnitPrice};
pub use error::{AppError, AppResult};
pub use ledger::Ledger;
pub use pricing::PriceList;
pub use session::Session;
pub use store::{JsonFileStore, MemoryStore, PersistedState, Store};
pub use summary::{CategoryTotals, Summary};
pub use validation::{SaleForm, ValidationReport};
