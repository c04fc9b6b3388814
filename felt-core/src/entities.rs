//! Core entity structures.
//!
//! All four aggregates are independent; only `Contact` owns child records
//! (`ContactReply`). Replies never outlive their parent contact.

use crate::{
    ContactId, ContactPriority, ContactStatus, MemberId, MemberStatus, PostId, PostStatus,
    ProductId, ProductStatus, ReplyId, Timestamp,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalog product (pool tables, cues, accessories).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub id: ProductId,
    /// URL-safe identifier, derived from `name` when not supplied explicitly.
    pub slug: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Open key-value map of product specifications (dimensions, finish, ...).
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub specifications: serde_json::Value,
    /// Unit price. Always positive.
    pub price: f64,
    pub currency: String,
    /// Units in stock. Never negative.
    pub stock: i32,
    pub sku: Option<String>,
    /// Ordered image URLs; the first one is the primary image.
    pub images: Vec<String>,
    pub featured: bool,
    pub status: ProductStatus,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
}

/// Blog post with derived reading metadata.
///
/// `word_count` and `read_time` are derived from `content` at write time
/// (see [`crate::reading`]). The API accepts explicit overrides on create
/// and update, so the stored values can diverge from `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BlogPost {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub id: PostId,
    /// URL-safe identifier, derived from `title` when not supplied explicitly.
    pub slug: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub category: String,
    pub word_count: i32,
    /// Estimated reading time in minutes, at 200 words per minute.
    pub read_time: i32,
    pub featured: bool,
    pub status: PostStatus,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub published_at: Option<Timestamp>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
}

/// Customer inquiry from the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Contact {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub category: String,
    /// Where the inquiry came from (contact form, showroom, phone, ...).
    pub source: String,
    pub status: ContactStatus,
    pub priority: ContactPriority,
    /// Replies sent to this contact, newest first.
    pub replies: Vec<ContactReply>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
}

/// A reply sent for a contact inquiry. Owned by exactly one [`Contact`].
///
/// Creating a reply transitions the parent contact's status to `Replied`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactReply {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub id: ReplyId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub contact_id: ContactId,
    pub message: String,
    /// Staff member who sent the reply.
    pub author: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
}

/// Personnel record for the team page and the admin permission matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TeamMember {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub skills: Vec<String>,
    /// Open map of boolean permission flags.
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub permissions: serde_json::Value,
    pub status: MemberStatus,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date"))]
    pub start_date: Option<NaiveDate>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
}
