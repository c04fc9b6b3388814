//! Contact inquiry REST API routes.
//!
//! Creation doubles as the public contact-form endpoint; the rest of the
//! surface is for the admin dashboard. Posting a reply transitions the
//! parent inquiry to Replied in the same transaction.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use felt_core::{Contact, ContactReply};

use crate::{
    db::DbClient,
    error::{ApiError, ApiResult},
    types::{
        ContactListParams, CreateContactRequest, CreateReplyRequest, MessageResponse,
        Paginated, UpdateContactRequest,
    },
    validation::{validate_email, HasUpdates, ValidateNonEmpty},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /api/contacts - List contact inquiries with filters and pagination
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "Contacts",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("search" = Option<String>, Query, description = "Substring search over name, email, subject, and message"),
        ("category" = Option<String>, Query, description = "Category filter, or \"All\""),
        ("status" = Option<String>, Query, description = "Status filter, or \"All\""),
        ("priority" = Option<String>, Query, description = "Priority filter, or \"All\""),
    ),
    responses(
        (status = 200, description = "One page of contact inquiries", body = Paginated<Contact>),
    )
)]
pub async fn list_contacts(
    State(db): State<DbClient>,
    Query(params): Query<ContactListParams>,
) -> ApiResult<impl IntoResponse> {
    let (items, total) = db.contact_list(&params).await?;
    Ok(Json(Paginated::new(items, &params.window(), total)))
}

/// POST /api/contacts - Create a contact inquiry
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "Contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact inquiry created", body = Contact),
        (status = 400, description = "Validation failed", body = ApiError),
    )
)]
pub async fn create_contact(
    State(db): State<DbClient>,
    Json(req): Json<CreateContactRequest>,
) -> ApiResult<impl IntoResponse> {
    req.name.validate_non_empty("name")?;
    validate_email("email", &req.email)?;
    req.message.validate_non_empty("message")?;

    let contact = db.contact_create(&req).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/contacts/{id} - Get contact inquiry by ID, replies included
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact details with replies", body = Contact),
        (status = 404, description = "Contact not found", body = ApiError),
    )
)]
pub async fn get_contact(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let contact = db
        .contact_get(id)
        .await?
        .ok_or_else(|| ApiError::contact_not_found(id))?;
    Ok(Json(contact))
}

/// PUT /api/contacts/{id} - Update a contact inquiry
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "Contact ID")),
    request_body = UpdateContactRequest,
    responses(
        (status = 200, description = "Updated contact", body = Contact),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 404, description = "Contact not found", body = ApiError),
    )
)]
pub async fn update_contact(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateContactRequest>,
) -> ApiResult<impl IntoResponse> {
    req.validate_has_updates()?;
    if let Some(email) = &req.email {
        validate_email("email", email)?;
    }

    let contact = db
        .contact_update(id, &req)
        .await?
        .ok_or_else(|| ApiError::contact_not_found(id))?;
    Ok(Json(contact))
}

/// DELETE /api/contacts/{id} - Delete a contact inquiry and its replies
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 404, description = "Contact not found", body = ApiError),
    )
)]
pub async fn delete_contact(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    if !db.contact_delete(id).await? {
        return Err(ApiError::contact_not_found(id));
    }
    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}

/// POST /api/contacts/{id}/replies - Reply to a contact inquiry
#[utoipa::path(
    post,
    path = "/api/contacts/{id}/replies",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "Contact ID")),
    request_body = CreateReplyRequest,
    responses(
        (status = 201, description = "Reply created; contact marked Replied", body = ContactReply),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 404, description = "Contact not found", body = ApiError),
    )
)]
pub async fn create_reply(
    State(db): State<DbClient>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateReplyRequest>,
) -> ApiResult<impl IntoResponse> {
    req.message.validate_non_empty("message")?;

    let reply = db
        .reply_create(id, &req)
        .await?
        .ok_or_else(|| ApiError::contact_not_found(id))?;
    Ok((StatusCode::CREATED, Json(reply)))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the contact routes router.
pub fn create_router(db: DbClient) -> Router {
    Router::new()
        .route("/", get(list_contacts).post(create_contact))
        .route(
            "/:id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        .route("/:id/replies", post(create_reply))
        .with_state(db)
}
