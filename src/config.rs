//! Configuration module
//!
//! Loads configuration from environment variables. Everything has a
//! default; the crate works with no environment at all.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::{Category, UnitPrice};
use crate::pricing::PriceList;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the session record is stored
    pub data_path: PathBuf,

    /// Environment (development, production)
    pub environment: String,

    /// Unit prices, with any per-category overrides applied
    pub prices: PriceList,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `TAQUILLA_DATA_PATH`, `ENVIRONMENT`, and the
    /// price overrides `TAQUILLA_VIP_PRICE`, `TAQUILLA_ORCHESTRA_PRICE`,
    /// `TAQUILLA_GENERAL_PRICE`. Prices are immutable after load.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_path = env::var("TAQUILLA_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("taquilla.json"));

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let mut prices = std::collections::BTreeMap::new();
        for (category, var, default) in [
            (Category::Vip, "TAQUILLA_VIP_PRICE", "50.00"),
            (Category::Orchestra, "TAQUILLA_ORCHESTRA_PRICE", "30.00"),
            (Category::General, "TAQUILLA_GENERAL_PRICE", "15.00"),
        ] {
            let raw = env::var(var).unwrap_or_else(|_| default.to_string());
            let price = UnitPrice::from_str(&raw).map_err(|_| ConfigError::InvalidValue(var))?;
            prices.insert(category, price);
        }

        Ok(Self {
            data_path,
            environment,
            prices: PriceList::new(prices),
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
