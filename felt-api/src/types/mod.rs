//! API request and response types.
//!
//! Entity bodies are the `felt-core` structs themselves; this module adds
//! the request/parameter types around them and the shared list envelope.

mod blog_post;
pub use blog_post::*;

mod contact;
pub use contact::*;

mod product;
pub use product::*;

mod public;
pub use public::*;

mod team_member;
pub use team_member::*;

use felt_core::{PageMeta, PageRequest};
use serde::{Deserialize, Deserializer, Serialize};

/// List response envelope: one page of items plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> Paginated<T> {
    /// Package one page of `items` for the window that produced it.
    pub fn new(items: Vec<T>, page: &PageRequest, total: i64) -> Self {
        Self {
            items,
            pagination: page.meta(total),
        }
    }
}

/// Plain-message response for delete endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Lenient numeric query parameter: malformed input becomes `None` (and so
/// falls back to the default) instead of rejecting the request.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_core::Product;

    #[derive(Debug, Deserialize)]
    struct Window {
        #[serde(default, deserialize_with = "lenient_i64")]
        page: Option<i64>,
        #[serde(default, deserialize_with = "lenient_i64")]
        limit: Option<i64>,
    }

    #[test]
    fn malformed_numbers_fall_back_to_none() {
        let window: Window = serde_urlencoded::from_str("page=abc&limit=ten").unwrap();
        assert_eq!(window.page, None);
        assert_eq!(window.limit, None);

        let page = PageRequest::from_options(window.page, window.limit);
        assert_eq!((page.page(), page.limit()), (1, 10));
    }

    #[test]
    fn valid_numbers_parse() {
        let window: Window = serde_urlencoded::from_str("page=3&limit=25").unwrap();
        assert_eq!(window.page, Some(3));
        assert_eq!(window.limit, Some(25));
    }

    #[test]
    fn missing_parameters_default() {
        let window: Window = serde_urlencoded::from_str("").unwrap();
        assert_eq!(window.page, None);
        assert_eq!(window.limit, None);
    }

    #[test]
    fn paginated_envelope_shape() -> Result<(), serde_json::Error> {
        let page = PageRequest::new(1, 10);
        let body = Paginated::<Product>::new(Vec::new(), &page, 0);
        let json = serde_json::to_value(&body)?;
        assert_eq!(json["pagination"]["pages"], 0);
        assert_eq!(json["items"].as_array().map(Vec::len), Some(0));
        Ok(())
    }
}
