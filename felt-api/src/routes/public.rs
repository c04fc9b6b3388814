//! Public site routes.
//!
//! Read-only mirrors of the catalog and the blog with the visibility filter
//! baked in: only Active products and Published posts are served, and the
//! bodies are the trimmed public projections.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    db::DbClient,
    error::{ApiError, ApiResult},
    types::{Paginated, PublicListParams, PublicPost, PublicProduct},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /api/public/products - List Active products
#[utoipa::path(
    get,
    path = "/api/public/products",
    tag = "Public",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("search" = Option<String>, Query, description = "Substring search over name and description"),
        ("category" = Option<String>, Query, description = "Category filter, or \"All\""),
        ("featured" = Option<String>, Query, description = "Featured filter, or \"All\""),
    ),
    responses(
        (status = 200, description = "One page of the public catalog", body = Paginated<PublicProduct>),
    )
)]
pub async fn list_public_products(
    State(db): State<DbClient>,
    Query(params): Query<PublicListParams>,
) -> ApiResult<impl IntoResponse> {
    let (items, total) = db.product_list_public(&params).await?;
    let items = items.into_iter().map(PublicProduct::from).collect();
    Ok(Json(Paginated::new(items, &params.window(), total)))
}

/// GET /api/public/products/{slug} - Get an Active product by slug
#[utoipa::path(
    get,
    path = "/api/public/products/{slug}",
    tag = "Public",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product details", body = PublicProduct),
        (status = 404, description = "No Active product with this slug", body = ApiError),
    )
)]
pub async fn get_public_product(
    State(db): State<DbClient>,
    Path(slug): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let product = db
        .product_get_public(&slug)
        .await?
        .ok_or_else(|| ApiError::product_not_found(&slug))?;
    Ok(Json(PublicProduct::from(product)))
}

/// GET /api/public/blog-posts - List Published posts
#[utoipa::path(
    get,
    path = "/api/public/blog-posts",
    tag = "Public",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("search" = Option<String>, Query, description = "Substring search over title, content, and excerpt"),
        ("category" = Option<String>, Query, description = "Category filter, or \"All\""),
        ("featured" = Option<String>, Query, description = "Featured filter, or \"All\""),
    ),
    responses(
        (status = 200, description = "One page of the public blog", body = Paginated<PublicPost>),
    )
)]
pub async fn list_public_posts(
    State(db): State<DbClient>,
    Query(params): Query<PublicListParams>,
) -> ApiResult<impl IntoResponse> {
    let (items, total) = db.post_list_public(&params).await?;
    let items = items.into_iter().map(PublicPost::from).collect();
    Ok(Json(Paginated::new(items, &params.window(), total)))
}

/// GET /api/public/blog-posts/{slug} - Get a Published post by slug
#[utoipa::path(
    get,
    path = "/api/public/blog-posts/{slug}",
    tag = "Public",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post details", body = PublicPost),
        (status = 404, description = "No Published post with this slug", body = ApiError),
    )
)]
pub async fn get_public_post(
    State(db): State<DbClient>,
    Path(slug): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let post = db
        .post_get_public(&slug)
        .await?
        .ok_or_else(|| ApiError::post_not_found(&slug))?;
    Ok(Json(PublicPost::from(post)))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the public routes router.
pub fn create_router(db: DbClient) -> Router {
    Router::new()
        .route("/products", get(list_public_products))
        .route("/products/:slug", get(get_public_product))
        .route("/blog-posts", get(list_public_posts))
        .route("/blog-posts/:slug", get(get_public_post))
        .with_state(db)
}
