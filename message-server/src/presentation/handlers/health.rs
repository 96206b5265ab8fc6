use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::presentation::AppState;

/// Health payload. Deliberately not wrapped in the standard envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub message: String,
    pub timestamp: i64,
    pub total_messages: usize,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthDto>) {
    let dto = HealthDto {
        status: "healthy".to_string(),
        message: "API is running".to_string(),
        timestamp: Utc::now().timestamp(),
        total_messages: state.store.count(),
    };

    (StatusCode::OK, Json(dto))
}
