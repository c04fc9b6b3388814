//! Blog post REST API routes (admin surface).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use felt_core::BlogPost;

use crate::{
    db::DbClient,
    error::{ApiError, ApiResult},
    types::{
        CreatePostRequest, MessageResponse, Paginated, PostListParams, UpdatePostRequest,
    },
    validation::{HasUpdates, ValidateNonEmpty},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /api/blog-posts - List blog posts with filters and pagination
#[utoipa::path(
    get,
    path = "/api/blog-posts",
    tag = "Blog",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("search" = Option<String>, Query, description = "Substring search over title, content, and excerpt"),
        ("category" = Option<String>, Query, description = "Category filter, or \"All\""),
        ("status" = Option<String>, Query, description = "Status filter, or \"All\""),
        ("featured" = Option<String>, Query, description = "Featured filter, or \"All\""),
    ),
    responses(
        (status = 200, description = "One page of blog posts", body = Paginated<BlogPost>),
    )
)]
pub async fn list_posts(
    State(db): State<DbClient>,
    Query(params): Query<PostListParams>,
) -> ApiResult<impl IntoResponse> {
    let (items, total) = db.post_list(&params).await?;
    Ok(Json(Paginated::new(items, &params.window(), total)))
}

/// POST /api/blog-posts - Create a blog post
#[utoipa::path(
    post,
    path = "/api/blog-posts",
    tag = "Blog",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Blog post created", body = BlogPost),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 409, description = "Duplicate slug", body = ApiError),
    )
)]
pub async fn create_post(
    State(db): State<DbClient>,
    Json(req): Json<CreatePostRequest>,
) -> ApiResult<impl IntoResponse> {
    req.title.validate_non_empty("title")?;
    req.content.validate_non_empty("content")?;

    let post = db.post_create(&req).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/blog-posts/{id} - Get blog post by ID
#[utoipa::path(
    get,
    path = "/api/blog-posts/{id}",
    tag = "Blog",
    params(("id" = Uuid, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Blog post details", body = BlogPost),
        (status = 404, description = "Blog post not found", body = ApiError),
    )
)]
pub async fn get_post(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let post = db
        .post_get(id)
        .await?
        .ok_or_else(|| ApiError::post_not_found(id))?;
    Ok(Json(post))
}

/// PUT /api/blog-posts/{id} - Update a blog post
#[utoipa::path(
    put,
    path = "/api/blog-posts/{id}",
    tag = "Blog",
    params(("id" = Uuid, Path, description = "Blog post ID")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated blog post", body = BlogPost),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 404, description = "Blog post not found", body = ApiError),
        (status = 409, description = "Duplicate slug", body = ApiError),
    )
)]
pub async fn update_post(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePostRequest>,
) -> ApiResult<impl IntoResponse> {
    req.validate_has_updates()?;
    if let Some(title) = &req.title {
        title.validate_non_empty("title")?;
    }
    if let Some(content) = &req.content {
        content.validate_non_empty("content")?;
    }

    let post = db
        .post_update(id, &req)
        .await?
        .ok_or_else(|| ApiError::post_not_found(id))?;
    Ok(Json(post))
}

/// DELETE /api/blog-posts/{id} - Delete a blog post
#[utoipa::path(
    delete,
    path = "/api/blog-posts/{id}",
    tag = "Blog",
    params(("id" = Uuid, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Blog post deleted", body = MessageResponse),
        (status = 404, description = "Blog post not found", body = ApiError),
    )
)]
pub async fn delete_post(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    if !db.post_delete(id).await? {
        return Err(ApiError::post_not_found(id));
    }
    Ok(Json(MessageResponse::new("Blog post deleted successfully")))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the blog post routes router.
pub fn create_router(db: DbClient) -> Router {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/:id", get(get_post).put(update_post).delete(delete_post))
        .with_state(db)
}
