//! Blog post request types.

use felt_core::{Facet, PageRequest, PostStatus, Timestamp};
use serde::{Deserialize, Serialize};

use super::lenient_i64;
use crate::validation::HasUpdates;

/// Request to create a blog post.
///
/// `word_count` and `read_time` are normally derived from `content`; the
/// explicit fields let a caller override them, which can desynchronize the
/// stored values from the actual content. That leniency is part of the
/// public contract and is deliberately not corrected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatePostRequest {
    pub title: String,
    /// Explicit slug; derived from `title` when absent.
    pub slug: Option<String>,
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Defaults to Draft.
    pub status: Option<PostStatus>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub published_at: Option<Timestamp>,
    /// Explicit word count override; derived from `content` when absent.
    pub word_count: Option<i32>,
    /// Explicit read time override; derived from the word count when absent.
    pub read_time: Option<i32>,
}

/// Request to update a blog post. When `content` changes and no explicit
/// override is supplied, `word_count` and `read_time` are recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub status: Option<PostStatus>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub published_at: Option<Timestamp>,
    pub word_count: Option<i32>,
    pub read_time: Option<i32>,
}

impl HasUpdates for UpdatePostRequest {
    fn has_any_updates(&self) -> bool {
        self.title.is_some()
            || self.slug.is_some()
            || self.content.is_some()
            || self.excerpt.is_some()
            || self.tags.is_some()
            || self.category.is_some()
            || self.featured.is_some()
            || self.status.is_some()
            || self.published_at.is_some()
            || self.word_count.is_some()
            || self.read_time.is_some()
    }
}

/// Query parameters for the blog post list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostListParams {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
    pub search: Option<String>,
    #[serde(default)]
    pub category: Facet<String>,
    #[serde(default)]
    pub status: Facet<PostStatus>,
    #[serde(default)]
    pub featured: Facet<bool>,
}

impl PostListParams {
    pub fn window(&self) -> PageRequest {
        PageRequest::from_options(self.page, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_facet_parses_wire_values() {
        let params: PostListParams =
            serde_urlencoded::from_str("status=Scheduled&search=maintenance").unwrap();
        assert_eq!(params.status.value(), Some(&PostStatus::Scheduled));
        assert_eq!(params.search.as_deref(), Some("maintenance"));
    }

    #[test]
    fn empty_update_has_no_changes() {
        assert!(!UpdatePostRequest::default().has_any_updates());
        let req = UpdatePostRequest {
            content: Some("New body".to_string()),
            ..Default::default()
        };
        assert!(req.has_any_updates());
    }
}
