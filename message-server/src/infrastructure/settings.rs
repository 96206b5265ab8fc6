use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Settings {
    pub http_addr: String,
    /// Base URL this service advertises for its own routes (image_url links).
    pub public_base_url: String,
    /// Base URL of the upstream status-image service.
    pub image_upstream_url: String,
    pub cors_origin: String,
    pub log_level: String,
    pub http_request_timeout_secs: u64,
    pub http_request_body_limit_bytes: usize,
    pub image_fetch_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let public_base_url = strip_trailing_slash(
            std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        );
        let image_upstream_url = strip_trailing_slash(
            std::env::var("IMAGE_UPSTREAM_URL").unwrap_or_else(|_| "https://http.cat".to_string()),
        );
        let cors_origin =
            std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let http_request_timeout_secs = parse_u64_env("HTTP_REQUEST_TIMEOUT_SECS", 15)?;
        let http_request_body_limit_bytes =
            parse_usize_env("HTTP_REQUEST_BODY_LIMIT_BYTES", 1024 * 1024)?;
        let image_fetch_timeout_secs = parse_u64_env("IMAGE_FETCH_TIMEOUT_SECS", 10)?;

        Ok(Self {
            http_addr,
            public_base_url,
            image_upstream_url,
            cors_origin,
            log_level,
            http_request_timeout_secs,
            http_request_body_limit_bytes,
            image_fetch_timeout_secs,
        })
    }
}

fn strip_trailing_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn parse_usize_env(key: &str, default: usize) -> Result<usize> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<usize>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
