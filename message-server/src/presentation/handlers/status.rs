use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};
use crate::presentation::envelope::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct HttpStatusDto {
    pub status_code: u16,
    pub image_url: String,
    pub description: String,
}

#[utoipa::path(
    get,
    path = "/api/status/{code}",
    tag = "status",
    params(
        ("code" = u16, Path, description = "HTTP status code (100..=599)")
    ),
    responses(
        (status = 200, description = "Status described", body = ApiResponse<HttpStatusDto>),
        (status = 400, description = "Code out of range")
    )
)]
pub async fn get_http_status(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<(StatusCode, Json<ApiResponse<HttpStatusDto>>)> {
    let code = parse_status_code(&code)
        .ok_or_else(|| AppError::BadRequest("Invalid status code".to_string()))?;

    let dto = HttpStatusDto {
        status_code: code,
        image_url: format!("{}/api/cat/{code}", state.settings.public_base_url),
        description: describe_status(code).to_string(),
    };

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Proxies the image for a status code from the upstream service. Failures
/// surface as plain text, not the JSON envelope: the consumer of this route
/// is an `<img>` tag.
#[utoipa::path(
    get,
    path = "/api/cat/{code}",
    tag = "status",
    params(
        ("code" = u16, Path, description = "HTTP status code (100..=599)")
    ),
    responses(
        (status = 200, description = "Image bytes, upstream content type"),
        (status = 400, description = "Code out of range (plain text)"),
        (status = 404, description = "Upstream unavailable (plain text)")
    )
)]
pub async fn get_status_image(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Response {
    let Some(code) = parse_status_code(&code) else {
        return (StatusCode::BAD_REQUEST, "Invalid status code").into_response();
    };

    let url = format!("{}/{code}", state.settings.image_upstream_url);
    let upstream = match state.http_client.get(&url).send().await {
        Ok(response) if response.status() == reqwest::StatusCode::OK => response,
        Ok(response) => {
            warn!(status = %response.status(), %url, "upstream image fetch returned non-200");
            return (StatusCode::NOT_FOUND, "Failed to fetch image").into_response();
        }
        Err(err) => {
            warn!(error = %err, %url, "upstream image fetch failed");
            return (StatusCode::NOT_FOUND, "Failed to fetch image").into_response();
        }
    };

    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let mut builder = Response::builder().status(StatusCode::OK);
    if let Some(value) = content_type {
        builder = builder.header(header::CONTENT_TYPE, value);
    }

    match builder.body(Body::from_stream(upstream.bytes_stream())) {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, "failed to build proxied image response");
            (StatusCode::NOT_FOUND, "Failed to fetch image").into_response()
        }
    }
}

/// Canonical description table. Codes outside the table deliberately map to
/// the fixed `"Unknown Status"` fallback.
pub fn describe_status(code: u16) -> &'static str {
    match code {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown Status",
    }
}

fn parse_status_code(raw: &str) -> Option<u16> {
    raw.parse::<u16>()
        .ok()
        .filter(|code| (100..=599).contains(code))
}

#[cfg(test)]
mod tests {
    use super::{describe_status, parse_status_code};

    #[test]
    fn describe_status_covers_canonical_codes() {
        assert_eq!(describe_status(200), "OK");
        assert_eq!(describe_status(201), "Created");
        assert_eq!(describe_status(204), "No Content");
        assert_eq!(describe_status(400), "Bad Request");
        assert_eq!(describe_status(401), "Unauthorized");
        assert_eq!(describe_status(404), "Not Found");
        assert_eq!(describe_status(500), "Internal Server Error");
    }

    #[test]
    fn describe_status_falls_back_to_unknown() {
        assert_eq!(describe_status(100), "Unknown Status");
        assert_eq!(describe_status(418), "Unknown Status");
        assert_eq!(describe_status(599), "Unknown Status");
    }

    #[test]
    fn parse_status_code_enforces_range() {
        assert_eq!(parse_status_code("100"), Some(100));
        assert_eq!(parse_status_code("599"), Some(599));
        assert_eq!(parse_status_code("99"), None);
        assert_eq!(parse_status_code("600"), None);
        assert_eq!(parse_status_code("abc"), None);
        assert_eq!(parse_status_code("-1"), None);
    }
}
