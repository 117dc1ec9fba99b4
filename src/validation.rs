//! Input validation
//!
//! Pure predicates over the raw form strings collected by the presentation
//! layer, plus the advisory per-keystroke filters a UI may apply while the
//! user types. The whole-value validators are the authoritative gate; the
//! keystroke filters are a typing convenience and must never be the only
//! check before a sale is recorded.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Category;
use crate::pricing::PriceList;

/// Letters (including accented Latin and ñ) and whitespace, minimum 2.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ\s]{2,}$").expect("invalid name pattern")
});

/// ASCII digits only.
static QUANTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("invalid quantity pattern"));

/// Non-inserting control keys accepted in the quantity field.
const QUANTITY_CONTROL_KEYS: [&str; 6] = [
    "Backspace",
    "Delete",
    "ArrowLeft",
    "ArrowRight",
    "Tab",
    "Enter",
];

/// Validate a customer name: after trimming, at least 2 characters, letters
/// (including accented/ñ) and spaces only.
pub fn is_valid_name(raw: &str) -> bool {
    NAME_RE.is_match(raw.trim())
}

/// Validate a quantity string: digits only, value strictly greater than
/// zero. Leading zeros are accepted ("007" is valid and means 7). No upper
/// bound is enforced here.
pub fn is_valid_quantity(raw: &str) -> bool {
    QUANTITY_RE.is_match(raw) && raw.bytes().any(|b| b != b'0')
}

/// Validate a raw category key against the price list.
pub fn is_valid_category(raw: &str, prices: &PriceList) -> bool {
    raw.parse::<Category>()
        .map(|category| prices.contains(category))
        .unwrap_or(false)
}

/// Whether a single character is acceptable in the name field.
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || "ÁÉÍÓÚáéíóúÑñ".contains(c) || c.is_whitespace()
}

/// Whether a key press is acceptable in the quantity field: a digit, or a
/// non-inserting control key (navigation, deletion, submit).
pub fn is_quantity_key(key: &str) -> bool {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_digit(),
        _ => QUANTITY_CONTROL_KEYS.contains(&key),
    }
}

/// Drop every character the name field does not accept. Pure filter for the
/// event-handling boundary to apply while the user types.
pub fn strip_invalid_name_chars(raw: &str) -> String {
    raw.chars().filter(|c| is_name_char(*c)).collect()
}

/// Drop every character the quantity field does not accept.
pub fn strip_invalid_quantity_chars(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// The form field an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    Quantity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Quantity => "quantity",
        };
        f.write_str(name)
    }
}

/// A field-level validation failure with a human-readable message for the
/// presentation layer to display next to the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name may only contain letters and spaces (minimum 2 characters)")]
    InvalidName,

    #[error("Please select a ticket category")]
    InvalidCategory,

    #[error("Quantity must be a whole number greater than zero")]
    InvalidQuantity,
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldError::InvalidName => Field::Name,
            FieldError::InvalidCategory => Field::Category,
            FieldError::InvalidQuantity => Field::Quantity,
        }
    }
}

/// All field errors found in one form submission. Validation never mutates
/// any state; a non-empty report aborts the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Raw form input as collected by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleForm {
    pub name: String,
    pub category: String,
    pub quantity: String,
}

impl SaleForm {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
        }
    }

    /// Validate every field and convert to typed values.
    ///
    /// All fields are checked so the report carries one error per failing
    /// field, not just the first.
    pub fn validate(&self, prices: &PriceList) -> Result<ValidatedForm, ValidationReport> {
        let mut errors = Vec::new();

        if !is_valid_name(&self.name) {
            errors.push(FieldError::InvalidName);
        }

        let category = match self.category.parse::<Category>() {
            Ok(category) if prices.contains(category) => Some(category),
            _ => {
                errors.push(FieldError::InvalidCategory);
                None
            }
        };

        // The predicate has no upper bound; a value too large to represent
        // gets the same field error as a malformed one.
        let quantity = if is_valid_quantity(&self.quantity) {
            match self.quantity.parse::<u32>() {
                Ok(quantity) => Some(quantity),
                Err(_) => {
                    errors.push(FieldError::InvalidQuantity);
                    None
                }
            }
        } else {
            errors.push(FieldError::InvalidQuantity);
            None
        };

        if !errors.is_empty() {
            return Err(ValidationReport { errors });
        }

        Ok(ValidatedForm {
            customer_name: self.name.trim().to_string(),
            category: category.expect("category checked above"),
            quantity: quantity.expect("quantity checked above"),
        })
    }
}

/// Typed output of a successful form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    pub customer_name: String,
    pub category: Category,
    pub quantity: u32,
}
