//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Unknown cart line ids and empty collections are not errors: those
/// operations are no-ops or return zero-valued results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Quantity passed to an add operation was not positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityExceedsLimit { requested: u32, max: u32 },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Two records of the same kind share an id.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// A product references a seller that is not in the dataset.
    #[error("Product {product} references unknown seller {seller}")]
    UnknownSeller { product: String, seller: String },

    /// A record violates a field constraint (price, rating, date).
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Sort key name not recognised.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CommerceError::QuantityExceedsLimit {
            requested: 10_000,
            max: 9999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 10000 exceeds maximum allowed (9999)"
        );

        let err = CommerceError::DuplicateId {
            kind: "product",
            id: "p-1".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate product id: p-1");
    }

    #[test]
    fn test_from_serde_json() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let err: CommerceError = parse.unwrap_err().into();
        assert!(matches!(err, CommerceError::Serialization(_)));
    }
}
