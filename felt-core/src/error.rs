//! Domain validation errors.

use thiserror::Error;

/// Validation errors raised by domain invariants before anything is
/// persisted. The API layer maps these to 400 responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: &'static str },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Check the product price invariant: price must be strictly positive.
pub fn validate_price(price: f64) -> Result<(), DomainError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidValue {
            field: "price",
            reason: format!("must be positive, got {price}"),
        })
    }
}

/// Check the product stock invariant: stock must be non-negative.
pub fn validate_stock(stock: i32) -> Result<(), DomainError> {
    if stock >= 0 {
        Ok(())
    } else {
        Err(DomainError::InvalidValue {
            field: "stock",
            reason: format!("must be non-negative, got {stock}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_must_be_positive() {
        assert!(validate_price(1299.0).is_ok());
        assert!(validate_price(0.01).is_ok());
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-5.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn stock_must_be_non_negative() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(40).is_ok());
        assert!(validate_stock(-1).is_err());
    }
}
