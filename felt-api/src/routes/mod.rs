//! Route modules and router assembly.
//!
//! The admin CRUD surface lives under /api/*, the read-only site mirrors
//! under /api/public/*, and the health probes under /health/*. The OpenAPI
//! document is served at /openapi.json (Swagger UI at /swagger-ui with the
//! `swagger-ui` feature).

pub mod blog_post;
pub mod contact;
pub mod health;
pub mod product;
pub mod public;
pub mod team_member;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    config::ApiConfig,
    db::DbClient,
    error::{ApiError, ApiResult},
    telemetry::request_logging_middleware,
};

#[cfg(feature = "openapi")]
use crate::openapi::ApiDoc;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;

// ============================================================================
// OPENAPI HANDLERS
// ============================================================================

#[cfg(feature = "openapi")]
async fn openapi_json() -> impl axum::response::IntoResponse {
    axum::Json(ApiDoc::openapi())
}

// ============================================================================
// PRODUCTION VALIDATION
// ============================================================================

/// Check if running in a production environment.
fn is_production_environment() -> bool {
    std::env::var("FELT_ENVIRONMENT")
        .map(|e| matches!(e.to_lowercase().as_str(), "production" | "prod"))
        .unwrap_or(false)
}

/// Validate API configuration for production use.
fn validate_api_config_for_production(config: &ApiConfig) -> ApiResult<()> {
    if config.cors_origins.is_empty() {
        return Err(ApiError::invalid_input(
            "CORS origins not configured for production. Set FELT_CORS_ORIGINS.",
        ));
    }
    Ok(())
}

// ============================================================================
// CORS
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// In development mode (empty origins), allows all origins.
/// In production mode, only allows configured origins.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.cors_origins.is_empty() {
        tracing::info!("CORS: Development mode - allowing all origins");
        cors.allow_origin(Any).allow_headers(Any)
    } else {
        tracing::info!(
            "CORS: Production mode - allowing origins: {:?}",
            config.cors_origins
        );
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();

        if config.cors_allow_credentials {
            cors.allow_origin(origins).allow_credentials(true)
        } else {
            cors.allow_origin(origins)
        }
    }
}

// ============================================================================
// ROUTER ASSEMBLY
// ============================================================================

/// Create the complete API router.
///
/// - Admin CRUD routes under /api/{products,blog-posts,contacts,team-members}
/// - Public site mirrors under /api/public/*
/// - Health checks at /health/*
/// - OpenAPI spec at /openapi.json
/// - Swagger UI at /swagger-ui (when the swagger-ui feature is enabled)
///
/// In production environments (FELT_ENVIRONMENT=production), validates that
/// CORS is explicitly configured.
pub fn create_api_router(db: DbClient, api_config: &ApiConfig) -> ApiResult<Router> {
    if is_production_environment() {
        validate_api_config_for_production(api_config)?;
    }

    let api_routes = Router::new()
        .nest("/products", product::create_router(db.clone()))
        .nest("/blog-posts", blog_post::create_router(db.clone()))
        .nest("/contacts", contact::create_router(db.clone()))
        .nest("/team-members", team_member::create_router(db.clone()))
        .nest("/public", public::create_router(db.clone()));

    #[allow(unused_mut)]
    let mut router = Router::new()
        .nest("/api", api_routes)
        .nest("/health", health::create_router(db));

    #[cfg(all(feature = "openapi", not(feature = "swagger-ui")))]
    {
        router = router.route("/openapi.json", axum::routing::get(openapi_json));
    }

    #[cfg(feature = "swagger-ui")]
    {
        use utoipa_swagger_ui::SwaggerUi;
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()));
    }

    let cors = build_cors_layer(api_config);

    Ok(router.layer(from_fn(request_logging_middleware)).layer(cors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt; // for `oneshot`

    #[test]
    fn test_dev_config_passes_without_origins() {
        let config = ApiConfig::default();
        assert!(validate_api_config_for_production(&config).is_err());

        let mut prod = ApiConfig::default();
        prod.cors_origins = vec!["https://feltandslate.com".to_string()];
        assert!(validate_api_config_for_production(&prod).is_ok());
    }

    // The pool is created lazily, so routes that never touch the database
    // can be exercised without a server.
    fn test_app() -> Router {
        let db = DbClient::from_config(&DbConfig::default()).expect("pool");
        create_api_router(db, &ApiConfig::default()).expect("router")
    }

    #[tokio::test]
    async fn test_ping_round_trip() {
        let app = test_app();

        let request = Request::builder()
            .uri("/health/ping")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 64).await.unwrap();
        assert_eq!(&body[..], b"pong");
    }

    #[tokio::test]
    async fn test_liveness_round_trip() {
        let app = test_app();

        let request = Request::builder()
            .uri("/health/live")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let app = test_app();

        let request = Request::builder()
            .uri("/api/nonexistent")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dev_preflight_allows_any_origin() {
        let app = test_app();

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/products")
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[cfg(feature = "openapi")]
    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = test_app();

        let request = Request::builder()
            .uri("/openapi.json")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
