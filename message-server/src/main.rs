use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use message_server::data::message_store::MessageStore;
use message_server::infrastructure::logging::init_logging;
use message_server::infrastructure::settings::Settings;
use message_server::presentation::AppState;
use message_server::server::run_http;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.image_fetch_timeout_secs))
        .build()?;

    let state = AppState::new(
        Arc::new(settings.clone()),
        Arc::new(MessageStore::new()),
        http_client,
    );

    run_http(&settings, state).await
}
