//! Felt & Slate API - REST layer.
//!
//! This crate provides the HTTP API for the Felt & Slate storefront: the
//! admin CRUD surface (products, blog posts, contact inquiries, team
//! members), the read-only public site mirrors, and the health probes. The
//! domain types and pure logic live in `felt-core`; this crate adds Axum
//! routing, PostgreSQL persistence, and the shared list-query resolver.

pub mod config;
pub mod db;
pub mod error;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod query;
pub mod routes;
pub mod telemetry;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::ApiConfig;
pub use db::{DbClient, DbConfig};
pub use error::{ApiError, ApiResult, ErrorCode};
#[cfg(feature = "openapi")]
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use types::*;
