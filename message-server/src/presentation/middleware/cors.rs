use anyhow::{Context, Result};
use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::IntoResponse;

use crate::infrastructure::settings::Settings;

/// Stamps the CORS headers on every response, including errors and the raw
/// image proxy, and answers preflight OPTIONS with an empty 204 before any
/// handler runs. tower-http's CorsLayer only emits headers for requests that
/// carry an Origin, which is not the contract here.
pub fn apply_cors(router: Router, settings: &Settings) -> Result<Router> {
    let allow_origin: HeaderValue = settings
        .cors_origin
        .parse()
        .with_context(|| format!("invalid CORS origin: {}", settings.cors_origin))?;

    Ok(router.layer(middleware::from_fn(
        move |request: Request, next: Next| {
            let allow_origin = allow_origin.clone();
            async move {
                if request.method() == Method::OPTIONS {
                    let mut response = StatusCode::NO_CONTENT.into_response();
                    set_cors_headers(response.headers_mut(), &allow_origin);
                    return response;
                }

                let mut response = next.run(request).await;
                set_cors_headers(response.headers_mut(), &allow_origin);
                response
            }
        },
    )))
}

fn set_cors_headers(headers: &mut HeaderMap, allow_origin: &HeaderValue) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin.clone());
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
}
