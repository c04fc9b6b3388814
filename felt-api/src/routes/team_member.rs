//! Team member REST API routes (admin surface).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use felt_core::TeamMember;

use crate::{
    db::DbClient,
    error::{ApiError, ApiResult},
    types::{
        CreateMemberRequest, MemberListParams, MessageResponse, Paginated,
        UpdateMemberRequest,
    },
    validation::{validate_email, HasUpdates, ValidateNonEmpty},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /api/team-members - List team members with filters and pagination
#[utoipa::path(
    get,
    path = "/api/team-members",
    tag = "Team",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("search" = Option<String>, Query, description = "Substring search over names, email, and role"),
        ("department" = Option<String>, Query, description = "Department filter, or \"All\""),
        ("role" = Option<String>, Query, description = "Role filter, or \"All\""),
        ("status" = Option<String>, Query, description = "Status filter, or \"All\""),
    ),
    responses(
        (status = 200, description = "One page of team members", body = Paginated<TeamMember>),
    )
)]
pub async fn list_members(
    State(db): State<DbClient>,
    Query(params): Query<MemberListParams>,
) -> ApiResult<impl IntoResponse> {
    let (items, total) = db.member_list(&params).await?;
    Ok(Json(Paginated::new(items, &params.window(), total)))
}

/// POST /api/team-members - Create a team member
#[utoipa::path(
    post,
    path = "/api/team-members",
    tag = "Team",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Team member created", body = TeamMember),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 409, description = "Duplicate email", body = ApiError),
    )
)]
pub async fn create_member(
    State(db): State<DbClient>,
    Json(req): Json<CreateMemberRequest>,
) -> ApiResult<impl IntoResponse> {
    req.first_name.validate_non_empty("first_name")?;
    req.last_name.validate_non_empty("last_name")?;
    validate_email("email", &req.email)?;
    req.role.validate_non_empty("role")?;
    req.department.validate_non_empty("department")?;

    let member = db.member_create(&req).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/team-members/{id} - Get team member by ID
#[utoipa::path(
    get,
    path = "/api/team-members/{id}",
    tag = "Team",
    params(("id" = Uuid, Path, description = "Team member ID")),
    responses(
        (status = 200, description = "Team member details", body = TeamMember),
        (status = 404, description = "Team member not found", body = ApiError),
    )
)]
pub async fn get_member(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let member = db
        .member_get(id)
        .await?
        .ok_or_else(|| ApiError::member_not_found(id))?;
    Ok(Json(member))
}

/// PUT /api/team-members/{id} - Update a team member
#[utoipa::path(
    put,
    path = "/api/team-members/{id}",
    tag = "Team",
    params(("id" = Uuid, Path, description = "Team member ID")),
    request_body = UpdateMemberRequest,
    responses(
        (status = 200, description = "Updated team member", body = TeamMember),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 404, description = "Team member not found", body = ApiError),
        (status = 409, description = "Duplicate email", body = ApiError),
    )
)]
pub async fn update_member(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMemberRequest>,
) -> ApiResult<impl IntoResponse> {
    req.validate_has_updates()?;
    if let Some(email) = &req.email {
        validate_email("email", email)?;
    }

    let member = db
        .member_update(id, &req)
        .await?
        .ok_or_else(|| ApiError::member_not_found(id))?;
    Ok(Json(member))
}

/// DELETE /api/team-members/{id} - Delete a team member
#[utoipa::path(
    delete,
    path = "/api/team-members/{id}",
    tag = "Team",
    params(("id" = Uuid, Path, description = "Team member ID")),
    responses(
        (status = 200, description = "Team member deleted", body = MessageResponse),
        (status = 404, description = "Team member not found", body = ApiError),
    )
)]
pub async fn delete_member(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    if !db.member_delete(id).await? {
        return Err(ApiError::member_not_found(id));
    }
    Ok(Json(MessageResponse::new("Team member deleted successfully")))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the team member routes router.
pub fn create_router(db: DbClient) -> Router {
    Router::new()
        .route("/", get(list_members).post(create_member))
        .route(
            "/:id",
            get(get_member).put(update_member).delete(delete_member),
        )
        .with_state(db)
}
