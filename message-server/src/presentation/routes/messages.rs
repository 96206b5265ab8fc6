use axum::Router;
use axum::routing::{get, put};

use crate::presentation::AppState;
use crate::presentation::handlers::messages::{
    create_message, delete_message, list_messages, update_message,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_messages).post(create_message))
        .route("/{id}", put(update_message).delete(delete_message))
}
