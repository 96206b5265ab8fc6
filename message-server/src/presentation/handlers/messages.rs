use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::message::{CreateMessageRequest, Message, UpdateMessageRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};
use crate::presentation::envelope::ApiResponse;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMessageDto {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 500))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMessageDto {
    #[validate(length(min = 1, max = 500))]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageDto {
    pub id: i64,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            username: message.username,
            content: message.content,
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "messages",
    responses(
        (status = 200, description = "Messages listed", body = ApiResponse<Vec<MessageDto>>)
    )
)]
pub async fn list_messages(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<ApiResponse<Vec<MessageDto>>>)> {
    let messages: Vec<MessageDto> = state
        .store
        .get_all()
        .into_iter()
        .map(MessageDto::from)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(messages))))
}

#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message created", body = ApiResponse<MessageDto>),
        (status = 400, description = "Invalid JSON or validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn create_message(
    State(state): State<AppState>,
    body: Result<Json<CreateMessageDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<MessageDto>>)> {
    let Json(dto) = body.map_err(|_| AppError::BadRequest("Invalid JSON".to_string()))?;
    dto.validate()?;

    let req = CreateMessageRequest {
        username: dto.username,
        content: dto.content,
    }
    .validate()?;

    let message = state
        .store
        .create(req.username, req.content)
        .map_err(|err| {
            error!(error = %err, "failed to create message");
            AppError::Internal("Failed to create message".to_string())
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(MessageDto::from(message))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/messages/{id}",
    tag = "messages",
    params(
        ("id" = i64, Path, description = "Message id")
    ),
    request_body = UpdateMessageDto,
    responses(
        (status = 200, description = "Message updated", body = ApiResponse<MessageDto>),
        (status = 400, description = "Invalid id, invalid JSON or validation error"),
        (status = 404, description = "Message not found")
    )
)]
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateMessageDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<MessageDto>>)> {
    let id = parse_message_id(&id)?;
    let Json(dto) = body.map_err(|_| AppError::BadRequest("Invalid JSON".to_string()))?;
    dto.validate()?;

    let req = UpdateMessageRequest {
        content: dto.content,
    }
    .validate()?;

    let message = state.store.update(id, req.content)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(MessageDto::from(message))),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = "messages",
    params(
        ("id" = i64, Path, description = "Message id")
    ),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Message not found")
    )
)]
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_message_id(&id)?;
    state.store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_message_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest("Invalid message id".to_string()))
}
