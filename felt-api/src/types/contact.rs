//! Contact inquiry request types.

use felt_core::{ContactPriority, ContactStatus, Facet, PageRequest};
use serde::{Deserialize, Serialize};

use super::lenient_i64;
use crate::validation::HasUpdates;

/// Request to create a contact inquiry (contact form submission).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    /// Defaults to "General".
    pub category: Option<String>,
    /// Where the inquiry came from; defaults to "website".
    pub source: Option<String>,
    /// Defaults to New.
    pub status: Option<ContactStatus>,
    /// Defaults to Medium.
    pub priority: Option<ContactPriority>,
}

/// Request to update a contact inquiry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub status: Option<ContactStatus>,
    pub priority: Option<ContactPriority>,
}

impl HasUpdates for UpdateContactRequest {
    fn has_any_updates(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.subject.is_some()
            || self.message.is_some()
            || self.category.is_some()
            || self.source.is_some()
            || self.status.is_some()
            || self.priority.is_some()
    }
}

/// Request to create a reply for a contact inquiry.
///
/// Persisting the reply transitions the parent contact to Replied; both
/// writes happen in one database transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateReplyRequest {
    pub message: String,
    /// Staff member sending the reply.
    pub author: Option<String>,
}

/// Query parameters for the contact list endpoint. Three independent
/// categorical facets, each honoring the "All" sentinel.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactListParams {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
    pub search: Option<String>,
    #[serde(default)]
    pub category: Facet<String>,
    #[serde(default)]
    pub status: Facet<ContactStatus>,
    #[serde(default)]
    pub priority: Facet<ContactPriority>,
}

impl ContactListParams {
    pub fn window(&self) -> PageRequest {
        PageRequest::from_options(self.page, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_facets_parse_independently() {
        let params: ContactListParams =
            serde_urlencoded::from_str("category=All&status=In+Progress&priority=High").unwrap();
        assert!(params.category.is_all());
        assert_eq!(params.status.value(), Some(&ContactStatus::InProgress));
        assert_eq!(params.priority.value(), Some(&ContactPriority::High));
    }

    #[test]
    fn garbled_pagination_with_valid_filters() {
        let params: ContactListParams =
            serde_urlencoded::from_str("page=NaN&limit=&status=Closed").unwrap();
        assert_eq!(params.window().page(), 1);
        assert_eq!(params.window().limit(), 10);
        assert_eq!(params.status.value(), Some(&ContactStatus::Closed));
    }
}
