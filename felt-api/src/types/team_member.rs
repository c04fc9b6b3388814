//! Team member request types.

use chrono::NaiveDate;
use felt_core::{Facet, MemberStatus, PageRequest};
use serde::{Deserialize, Serialize};

use super::lenient_i64;
use crate::validation::HasUpdates;

/// Request to create a team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Open map of boolean permission flags.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub permissions: Option<serde_json::Value>,
    /// Defaults to Active.
    pub status: Option<MemberStatus>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date"))]
    pub start_date: Option<NaiveDate>,
}

/// Request to update a team member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateMemberRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub skills: Option<Vec<String>>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub permissions: Option<serde_json::Value>,
    pub status: Option<MemberStatus>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date"))]
    pub start_date: Option<NaiveDate>,
}

impl HasUpdates for UpdateMemberRequest {
    fn has_any_updates(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.email.is_some()
            || self.role.is_some()
            || self.department.is_some()
            || self.skills.is_some()
            || self.permissions.is_some()
            || self.status.is_some()
            || self.start_date.is_some()
    }
}

/// Query parameters for the team member list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberListParams {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
    pub search: Option<String>,
    #[serde(default)]
    pub department: Facet<String>,
    #[serde(default)]
    pub role: Facet<String>,
    #[serde(default)]
    pub status: Facet<MemberStatus>,
}

impl MemberListParams {
    pub fn window(&self) -> PageRequest {
        PageRequest::from_options(self.page, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_facets_parse() {
        let params: MemberListParams =
            serde_urlencoded::from_str("department=Sales&role=All&status=On+Leave").unwrap();
        assert_eq!(params.department.value().map(String::as_str), Some("Sales"));
        assert!(params.role.is_all());
        assert_eq!(params.status.value(), Some(&MemberStatus::OnLeave));
    }
}
