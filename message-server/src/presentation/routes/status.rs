use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::health::health_check;
use crate::presentation::handlers::status::{get_http_status, get_status_image};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/status/{code}", get(get_http_status))
        .route("/api/cat/{code}", get(get_status_image))
        .route("/api/health", get(health_check))
}
