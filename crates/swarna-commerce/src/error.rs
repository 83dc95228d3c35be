//! Commerce error types.

use thiserror::Error;

/// Errors that can occur when loading or pricing store data.
///
/// Cart operations on unknown product ids are deliberately *not* errors;
/// they are silent no-ops (see [`crate::cart::Cart`]).
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Two catalog products share an identifier.
    #[error("duplicate product id: {0}")]
    DuplicateProductId(String),

    /// A catalog product has a negative price.
    #[error("negative price for product {id}: {paise} paise")]
    NegativePrice { id: String, paise: i64 },

    /// A catalog product has a rating outside 1-5.
    #[error("rating out of range for product {id}: {rating} (expected 1-5)")]
    RatingOutOfRange { id: String, rating: u8 },

    /// A catalog product names a category missing from the category map.
    #[error("unknown category for product {id}: {category}")]
    UnknownCategory { id: String, category: String },

    /// Currency mismatch in money arithmetic.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("arithmetic overflow in money calculation")]
    Overflow,
}
