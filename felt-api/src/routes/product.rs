//! Product REST API routes (admin surface).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use felt_core::{validate_price, validate_stock, Product};

use crate::{
    db::DbClient,
    error::{ApiError, ApiResult},
    types::{
        CreateProductRequest, MessageResponse, Paginated, ProductListParams,
        UpdateProductRequest,
    },
    validation::{HasUpdates, ValidateNonEmpty},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /api/products - List products with filters and pagination
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("search" = Option<String>, Query, description = "Substring search over name and description"),
        ("category" = Option<String>, Query, description = "Category filter, or \"All\""),
        ("status" = Option<String>, Query, description = "Status filter, or \"All\""),
        ("featured" = Option<String>, Query, description = "Featured filter, or \"All\""),
    ),
    responses(
        (status = 200, description = "One page of products", body = Paginated<Product>),
    )
)]
pub async fn list_products(
    State(db): State<DbClient>,
    Query(params): Query<ProductListParams>,
) -> ApiResult<impl IntoResponse> {
    let (items, total) = db.product_list(&params).await?;
    Ok(Json(Paginated::new(items, &params.window(), total)))
}

/// POST /api/products - Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 409, description = "Duplicate slug or sku", body = ApiError),
    )
)]
pub async fn create_product(
    State(db): State<DbClient>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<impl IntoResponse> {
    req.name.validate_non_empty("name")?;
    req.category.validate_non_empty("category")?;
    validate_price(req.price)?;
    validate_stock(req.stock)?;

    let product = db.product_create(&req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products/{id} - Get product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "Product not found", body = ApiError),
    )
)]
pub async fn get_product(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let product = db
        .product_get(id)
        .await?
        .ok_or_else(|| ApiError::product_not_found(id))?;
    Ok(Json(product))
}

/// PUT /api/products/{id} - Update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 404, description = "Product not found", body = ApiError),
        (status = 409, description = "Duplicate slug or sku", body = ApiError),
    )
)]
pub async fn update_product(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<impl IntoResponse> {
    req.validate_has_updates()?;
    if let Some(name) = &req.name {
        name.validate_non_empty("name")?;
    }
    if let Some(price) = req.price {
        validate_price(price)?;
    }
    if let Some(stock) = req.stock {
        validate_stock(stock)?;
    }

    let product = db
        .product_update(id, &req)
        .await?
        .ok_or_else(|| ApiError::product_not_found(id))?;
    Ok(Json(product))
}

/// DELETE /api/products/{id} - Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = ApiError),
    )
)]
pub async fn delete_product(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    if !db.product_delete(id).await? {
        return Err(ApiError::product_not_found(id));
    }
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the product routes router.
pub fn create_router(db: DbClient) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(db)
}
