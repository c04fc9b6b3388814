//! Error types for the Felt & Slate API.
//!
//! Defines the structured `ApiError` returned by every endpoint, the
//! `ErrorCode` enum that maps each error category to an HTTP status, and
//! the `IntoResponse` implementation that serializes errors as JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use felt_core::DomainError;

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
///
/// Three recoverable kinds exist: validation (400), not-found (404), and
/// uniqueness conflict (409). Everything else collapses to a generic server
/// error with the detail logged server-side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================================================
    // Validation Errors (400)
    // ========================================================================
    /// Request validation failed
    ValidationFailed,

    /// Request contains invalid input data
    InvalidInput,

    /// Required field is missing from request
    MissingField,

    /// Field value is out of valid range
    InvalidRange,

    /// Field format is incorrect
    InvalidFormat,

    // ========================================================================
    // Not Found Errors (404)
    // ========================================================================
    /// Requested product does not exist
    ProductNotFound,

    /// Requested blog post does not exist
    PostNotFound,

    /// Requested contact does not exist
    ContactNotFound,

    /// Requested team member does not exist
    MemberNotFound,

    // ========================================================================
    // Conflict Errors (409)
    // ========================================================================
    /// Unique constraint violated (duplicate slug, email, or sku)
    DuplicateValue,

    // ========================================================================
    // Server Errors (500, 503)
    // ========================================================================
    /// Internal server error
    InternalError,

    /// Database operation failed
    DatabaseError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    /// Database connection pool exhausted
    ConnectionPoolExhausted,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidInput
            | ErrorCode::MissingField
            | ErrorCode::InvalidRange
            | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,

            ErrorCode::ProductNotFound
            | ErrorCode::PostNotFound
            | ErrorCode::ContactNotFound
            | ErrorCode::MemberNotFound => StatusCode::NOT_FOUND,

            ErrorCode::DuplicateValue => StatusCode::CONFLICT,

            ErrorCode::ServiceUnavailable | ErrorCode::ConnectionPoolExhausted => {
                StatusCode::SERVICE_UNAVAILABLE
            }

            ErrorCode::InternalError | ErrorCode::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error response for API operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiError {
    /// Error code categorizing the error
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details (field errors, constraint names, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add additional details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    // ========================================================================
    // Convenience constructors for common errors
    // ========================================================================

    /// Create a ValidationFailed error.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a MissingField error.
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingField,
            format!("Required field '{}' is missing", field),
        )
    }

    /// Create an InvalidRange error.
    pub fn invalid_range(field: &str, min: impl fmt::Display, max: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidRange,
            format!("Field '{}' must be between {} and {}", field, min, max),
        )
    }

    /// Create an InvalidFormat error.
    pub fn invalid_format(field: &str, expected: &str) -> Self {
        Self::new(
            ErrorCode::InvalidFormat,
            format!("Field '{}' has invalid format, expected {}", field, expected),
        )
    }

    /// Create a ProductNotFound error.
    pub fn product_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ProductNotFound,
            format!("Product {} not found", id),
        )
    }

    /// Create a PostNotFound error.
    pub fn post_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::PostNotFound,
            format!("Blog post {} not found", id),
        )
    }

    /// Create a ContactNotFound error.
    pub fn contact_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ContactNotFound,
            format!("Contact {} not found", id),
        )
    }

    /// Create a MemberNotFound error.
    pub fn member_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::MemberNotFound,
            format!("Team member {} not found", id),
        )
    }

    /// Create a DuplicateValue error for a violated unique constraint.
    pub fn duplicate_value(constraint: &str) -> Self {
        Self::new(
            ErrorCode::DuplicateValue,
            format!("A record with the same {} already exists", constraint),
        )
    }

    /// Create an InternalError.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Create a DatabaseError.
    pub fn database_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Create a ServiceUnavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Create a ConnectionPoolExhausted error.
    pub fn connection_pool_exhausted() -> Self {
        Self::new(
            ErrorCode::ConnectionPoolExhausted,
            "Database connection pool exhausted",
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// ============================================================================
// AXUM INTEGRATION
// ============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self);
        (status, body).into_response()
    }
}

// ============================================================================
// CONVERSIONS FROM STANDARD ERRORS
// ============================================================================

/// Map a unique constraint name to the field the caller will recognize.
fn constraint_field(constraint: &str) -> &str {
    if constraint.contains("slug") {
        "slug"
    } else if constraint.contains("sku") {
        "sku"
    } else if constraint.contains("email") {
        "email"
    } else {
        "value"
    }
}

/// Convert from tokio_postgres::Error to ApiError.
///
/// Unique-constraint violations (SQLSTATE 23505) surface as 409 so the
/// storage layer, not a racy pre-check, is the authority on duplicates.
/// Everything else logs the detail server-side and returns a generic 500.
impl From<tokio_postgres::Error> for ApiError {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_err) = err.as_db_error() {
            if db_err.code() == &tokio_postgres::error::SqlState::UNIQUE_VIOLATION {
                let field = constraint_field(db_err.constraint().unwrap_or_default());
                return ApiError::duplicate_value(field);
            }
        }

        tracing::error!("Database error: {:?}", err);
        ApiError::database_error("Database operation failed")
    }
}

/// Convert from deadpool_postgres::PoolError to ApiError.
impl From<deadpool_postgres::PoolError> for ApiError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        tracing::error!("Connection pool error: {:?}", err);

        match err {
            deadpool_postgres::PoolError::Timeout(_) => ApiError::connection_pool_exhausted(),
            deadpool_postgres::PoolError::Closed => {
                ApiError::service_unavailable("Database connection pool is closed")
            }
            _ => ApiError::database_error("Failed to acquire database connection"),
        }
    }
}

/// Convert from domain validation errors to 400 responses.
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::RequiredFieldMissing { field } => ApiError::missing_field(field),
            DomainError::InvalidValue { field, reason } => {
                ApiError::new(ErrorCode::InvalidInput, format!("{}: {}", field, reason))
            }
        }
    }
}

/// Convert from serde_json::Error to ApiError.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization error: {:?}", err);
        ApiError::invalid_input(format!("Invalid JSON: {}", err))
    }
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_status_mapping() {
        assert_eq!(
            ErrorCode::ValidationFailed.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::ProductNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::DuplicateValue.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::ConnectionPoolExhausted.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_api_error_constructors() {
        let err = ApiError::product_not_found("9b2e");
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert!(err.message.contains("9b2e"));

        let err = ApiError::missing_field("name");
        assert_eq!(err.code, ErrorCode::MissingField);
        assert!(err.message.contains("name"));

        let err = ApiError::duplicate_value("slug");
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert!(err.message.contains("slug"));
    }

    #[test]
    fn test_constraint_field_mapping() {
        assert_eq!(constraint_field("products_slug_key"), "slug");
        assert_eq!(constraint_field("products_sku_key"), "sku");
        assert_eq!(constraint_field("team_members_email_key"), "email");
        assert_eq!(constraint_field("something_else"), "value");
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: ApiError = DomainError::InvalidValue {
            field: "price",
            reason: "must be positive, got -1".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_serialization() -> Result<(), serde_json::Error> {
        let err = ApiError::validation_failed("price must be positive");
        let json = serde_json::to_string(&err)?;

        assert!(json.contains("VALIDATION_FAILED"));
        assert!(json.contains("price must be positive"));

        let deserialized: ApiError = serde_json::from_str(&json)?;
        assert_eq!(deserialized, err);
        Ok(())
    }
}
