//! Ticket Categories
//!
//! The fixed ticket tiers sold at the box office. Each category maps to a
//! unit price in the [`PriceList`](crate::pricing::PriceList) and to a
//! display label for the presentation layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ticket category (tier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// VIP seating
    Vip,
    /// Reserved orchestra seating
    #[serde(rename = "butacas")]
    Orchestra,
    /// General admission
    #[serde(rename = "generales")]
    General,
}

impl Category {
    /// All known categories, in display order.
    pub const ALL: [Category; 3] = [Category::Vip, Category::Orchestra, Category::General];

    /// The storage key for this category ("vip", "butacas", "generales").
    pub fn key(&self) -> &'static str {
        match self {
            Category::Vip => "vip",
            Category::Orchestra => "butacas",
            Category::General => "generales",
        }
    }

    /// Human-readable label for tabular display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Vip => "Puestos VIP",
            Category::Orchestra => "Puestos Butacas",
            Category::General => "Puestos Generales",
        }
    }

    /// Display label for a raw category key. Unrecognized keys fall back
    /// to the key itself.
    pub fn label_for_key(key: &str) -> &str {
        match key.parse::<Category>() {
            Ok(category) => category.label(),
            Err(_) => key,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a raw string is not a known category key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category key: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vip" => Ok(Category::Vip),
            "butacas" => Ok(Category::Orchestra),
            "generales" => Ok(Category::General),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
