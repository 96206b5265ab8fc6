use axum::Router;

use super::AppState;

pub mod messages;
pub mod status;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/messages", messages::router())
        .merge(status::router())
}
