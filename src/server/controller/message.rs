use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        message::{MessageDto, StoreMessageDto, UpdateMessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::message::{self, MessageFilter, StoreMessageParams},
        service::message::MessageService,
        state::AppState,
    },
};

use entity::message::MessageKind;

/// Tag for grouping contact message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

#[derive(Deserialize)]
pub struct MessageListParams {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Submit a contact or service-request message. Public endpoint.
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = StoreMessageDto,
    responses(
        (status = 201, description = "The stored message", body = ApiResponse<MessageDto>),
        (status = 400, description = "Unknown message type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_message(
    State(state): State<AppState>,
    Json(payload): Json<StoreMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let kind = payload
        .kind
        .as_deref()
        .map(message::kind_from_str)
        .transpose()?
        .unwrap_or(MessageKind::Contact);

    let service = MessageService::new(&state.db);

    let stored = service
        .submit(StoreMessageParams {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            message: payload.message,
            kind,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Message received", message::to_dto(stored))),
    ))
}

/// List messages for the staff inbox, newest first.
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter by triage status"),
        ("type" = Option<String>, Query, description = "Filter by message type")
    ),
    responses(
        (status = 200, description = "Matching messages", body = ApiResponse<Vec<MessageDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_messages(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<MessageListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let filter = MessageFilter {
        status: params
            .status
            .as_deref()
            .map(message::status_from_str)
            .transpose()?,
        kind: params
            .kind
            .as_deref()
            .map(message::kind_from_str)
            .transpose()?,
    };

    let service = MessageService::new(&state.db);

    let messages: Vec<MessageDto> = service
        .list(filter)
        .await?
        .into_iter()
        .map(message::to_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Messages retrieved", messages)),
    ))
}

/// Get one message (staff).
#[utoipa::path(
    get,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(
        ("id" = i32, Path, description = "Message id")
    ),
    responses(
        (status = 200, description = "The message", body = ApiResponse<MessageDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = MessageService::new(&state.db);

    match service.get(id).await? {
        Some(found) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Message retrieved", message::to_dto(found))),
        )),
        None => Err(AppError::NotFound("Message not found".to_string())),
    }
}

/// Update a message's triage status (staff).
#[utoipa::path(
    put,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    request_body = UpdateMessageDto,
    params(
        ("id" = i32, Path, description = "Message id")
    ),
    responses(
        (status = 200, description = "The updated message", body = ApiResponse<MessageDto>),
        (status = 400, description = "Unknown message status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let status = message::status_from_str(&payload.status)?;

    let service = MessageService::new(&state.db);

    match service.update_status(id, status).await? {
        Some(updated) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Message updated", message::to_dto(updated))),
        )),
        None => Err(AppError::NotFound("Message not found".to_string())),
    }
}

/// Delete a message (staff).
#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(
        ("id" = i32, Path, description = "Message id")
    ),
    responses(
        (status = 200, description = "Message deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = MessageService::new(&state.db);

    if service.delete(id).await? {
        Ok((
            StatusCode::OK,
            Json(ApiResponse::message("Message deleted")),
        ))
    } else {
        Err(AppError::NotFound("Message not found".to_string()))
    }
}
