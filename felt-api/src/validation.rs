//! Validation helpers shared by route handlers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ApiError, ApiResult};

/// Trait for validating non-empty strings.
pub trait ValidateNonEmpty {
    /// Validate that the value is non-empty (not whitespace-only).
    ///
    /// # Errors
    /// Returns `ApiError::missing_field` when the value is empty.
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()>;
}

impl ValidateNonEmpty for str {
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()> {
        if self.trim().is_empty() {
            return Err(ApiError::missing_field(field_name));
        }
        Ok(())
    }
}

impl ValidateNonEmpty for String {
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()> {
        self.as_str().validate_non_empty(field_name)
    }
}

impl<T: ValidateNonEmpty> ValidateNonEmpty for Option<T> {
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()> {
        match self {
            Some(value) => value.validate_non_empty(field_name),
            None => Err(ApiError::missing_field(field_name)),
        }
    }
}

/// Trait for checking whether an update request carries any changes.
pub trait HasUpdates {
    /// True when at least one update field is set.
    fn has_any_updates(&self) -> bool;

    /// Validate that at least one update field is set.
    fn validate_has_updates(&self) -> ApiResult<()> {
        if !self.has_any_updates() {
            return Err(ApiError::invalid_input(
                "At least one field must be provided for update",
            ));
        }
        Ok(())
    }
}

// Intentionally loose: one @, no spaces, a dot somewhere after the @.
// The mail provider is the real authority on deliverability.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Validate an email address format.
pub fn validate_email(field_name: &str, value: &str) -> ApiResult<()> {
    value.validate_non_empty(field_name)?;
    if !EMAIL_RE.is_match(value.trim()) {
        return Err(ApiError::invalid_format(field_name, "an email address"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty() {
        assert!("hello".validate_non_empty("test").is_ok());
        assert!("".validate_non_empty("test").is_err());
        assert!("   ".validate_non_empty("test").is_err());
        assert!(Some("hi").map(str::to_string).validate_non_empty("test").is_ok());
        assert!(None::<String>.validate_non_empty("test").is_err());
    }

    #[test]
    fn test_validate_email_accepts_plausible_addresses() {
        assert!(validate_email("email", "sales@feltandslate.com").is_ok());
        assert!(validate_email("email", "a.b+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_malformed_addresses() {
        assert!(validate_email("email", "").is_err());
        assert!(validate_email("email", "not-an-email").is_err());
        assert!(validate_email("email", "two@@example.com").is_err());
        assert!(validate_email("email", "spaces in@example.com").is_err());
        assert!(validate_email("email", "no-tld@example").is_err());
    }

    #[test]
    fn test_has_updates_default_validation() {
        struct Empty;
        impl HasUpdates for Empty {
            fn has_any_updates(&self) -> bool {
                false
            }
        }
        assert!(Empty.validate_has_updates().is_err());
    }
}
