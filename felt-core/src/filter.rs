//! Filter and pagination model shared by every list endpoint.
//!
//! Each list query is built from the same pieces: a page window, an optional
//! free-text search, and zero or more categorical facets. The reserved value
//! `"All"` means "apply no constraint for this field" and is modeled as a
//! tagged variant here so it can never collide with a real category name or
//! leak into the storage layer as a literal equality constraint.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default page number when the caller supplies none (or garbage).
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size when the caller supplies none (or garbage).
pub const DEFAULT_LIMIT: i64 = 10;

// ============================================================================
// FACET
// ============================================================================

/// A categorical filter parameter: either a concrete value or the explicit
/// absence of a constraint (the `"All"` sentinel on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facet<T> {
    /// No constraint for this field.
    #[default]
    All,
    /// Constrain the field to exactly this value.
    Only(T),
}

impl<T> Facet<T> {
    /// True when this facet applies no constraint.
    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    /// The constrained value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Facet::All => None,
            Facet::Only(value) => Some(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for Facet<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.eq_ignore_ascii_case("all") {
            return Ok(Facet::All);
        }
        raw.parse().map(Facet::Only).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// PAGINATION
// ============================================================================

/// A normalized page window. Invalid input fails closed to the defaults:
/// a non-positive (or unparseable) page or limit never raises, it becomes
/// page 1 / limit 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a window from already-parsed values, clamping non-positive
    /// input to the defaults.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: if page >= 1 { page } else { DEFAULT_PAGE },
            limit: if limit >= 1 { limit } else { DEFAULT_LIMIT },
        }
    }

    /// Build a window from optional values, treating `None` as default.
    pub fn from_options(page: Option<i64>, limit: Option<i64>) -> Self {
        Self::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or(DEFAULT_LIMIT))
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Row offset for offset/limit windowing: `(page - 1) * limit`.
    ///
    /// Saturates at `i64::MAX` so an absurdly large page number fails
    /// closed to an empty window instead of wrapping negative.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Pagination metadata for a result set of `total` matching rows.
    pub fn meta(&self, total: i64) -> PageMeta {
        PageMeta {
            page: self.page,
            limit: self.limit,
            total,
            pages: total.max(0).div_ceil(self.limit),
        }
    }
}

/// Pagination metadata returned alongside every list response.
///
/// `pages` is computed against the same filter predicate as the returned
/// window, so `pages == ceil(total / limit)` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ProductStatus;
    use proptest::prelude::*;

    fn facet_from_query<T>(raw: &str) -> Result<Facet<T>, serde_json::Error>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        serde_json::from_value(serde_json::Value::String(raw.to_string()))
    }

    #[test]
    fn all_sentinel_is_absence_of_constraint() -> Result<(), serde_json::Error> {
        let facet: Facet<String> = facet_from_query("All")?;
        assert!(facet.is_all());
        assert_eq!(facet.value(), None);
        // Accepted case-insensitively; "All" is reserved in every casing.
        let facet: Facet<String> = facet_from_query("all")?;
        assert!(facet.is_all());
        Ok(())
    }

    #[test]
    fn concrete_values_parse_into_only() -> Result<(), serde_json::Error> {
        let facet: Facet<ProductStatus> = facet_from_query("Out of Stock")?;
        assert_eq!(facet, Facet::Only(ProductStatus::OutOfStock));
        let facet: Facet<String> = facet_from_query("Tables")?;
        assert_eq!(facet.value().map(String::as_str), Some("Tables"));
        Ok(())
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        assert!(facet_from_query::<ProductStatus>("Discontinued").is_err());
    }

    #[test]
    fn missing_facet_defaults_to_all() {
        assert!(Facet::<ProductStatus>::default().is_all());
    }

    #[test]
    fn page_window_arithmetic() {
        let page = PageRequest::new(3, 10);
        assert_eq!(page.offset(), 20);
        let meta = page.meta(25);
        assert_eq!(meta.pages, 3);
        assert_eq!(meta.total, 25);
    }

    #[test]
    fn invalid_input_fails_closed_to_defaults() {
        let page = PageRequest::new(0, -5);
        assert_eq!(page.page(), DEFAULT_PAGE);
        assert_eq!(page.limit(), DEFAULT_LIMIT);
        assert_eq!(page.offset(), 0);

        let page = PageRequest::from_options(None, None);
        assert_eq!((page.page(), page.limit()), (DEFAULT_PAGE, DEFAULT_LIMIT));
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        assert_eq!(PageRequest::default().meta(0).pages, 0);
    }

    #[test]
    fn huge_page_numbers_saturate_the_offset() {
        let window = PageRequest::new(i64::MAX, 9_999);
        assert_eq!(window.offset(), i64::MAX);

        let window = PageRequest::new(i64::MAX, 1);
        assert_eq!(window.offset(), i64::MAX - 1);
    }

    proptest! {
        #[test]
        fn pages_is_always_ceil_of_total_over_limit(
            page in 1i64..10_000,
            limit in 1i64..1_000,
            total in 0i64..1_000_000,
        ) {
            let meta = PageRequest::new(page, limit).meta(total);
            prop_assert_eq!(meta.pages, (total + limit - 1) / limit);
            // The last page always ends at or past `total`.
            prop_assert!(meta.pages * limit >= total);
            prop_assert!((meta.pages - 1) * limit < total || total == 0);
        }

        #[test]
        fn offset_never_negative(page in any::<i64>(), limit in any::<i64>()) {
            let window = PageRequest::new(page, limit);
            prop_assert!(window.offset() >= 0);
            prop_assert_eq!(
                window.offset(),
                (window.page() - 1).saturating_mul(window.limit())
            );
        }
    }
}
