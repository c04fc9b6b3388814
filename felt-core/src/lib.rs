#![feature(int_roundings)]
//! Core domain types for the Felt & Slate storefront.
//!
//! This crate defines the entities served by the public site and the admin
//! dashboard (products, blog posts, contact inquiries, team members) along
//! with the pure logic shared by every endpoint: slug derivation, read-time
//! estimation, and the filter/pagination model used by all list queries.
//!
//! No I/O lives here. Persistence and HTTP concerns belong to `felt-api`.

pub mod entities;
pub mod enums;
pub mod error;
pub mod filter;
pub mod reading;
pub mod slug;

use chrono::{DateTime, Utc};
use uuid::Uuid;

// ============================================================================
// ID AND TIME ALIASES
// ============================================================================

/// Product identifier.
pub type ProductId = Uuid;
/// Blog post identifier.
pub type PostId = Uuid;
/// Contact inquiry identifier.
pub type ContactId = Uuid;
/// Contact reply identifier.
pub type ReplyId = Uuid;
/// Team member identifier.
pub type MemberId = Uuid;

/// Timestamp type used across all entities.
pub type Timestamp = DateTime<Utc>;

// Re-export commonly used types
pub use entities::{BlogPost, Contact, ContactReply, Product, TeamMember};
pub use enums::{ContactPriority, ContactStatus, MemberStatus, PostStatus, ProductStatus};
pub use error::{validate_price, validate_stock, DomainError};
pub use filter::{Facet, PageMeta, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use reading::{read_time, word_count, WORDS_PER_MINUTE};
pub use slug::derive_slug;
