use std::sync::Arc;

use crate::data::message_store::MessageStore;
use crate::infrastructure::settings::Settings;

pub mod app_error;
pub mod envelope;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<MessageStore>,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(
        settings: Arc<Settings>,
        store: Arc<MessageStore>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            settings,
            store,
            http_client,
        }
    }
}
