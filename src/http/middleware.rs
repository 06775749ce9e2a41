use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use http::header::HeaderMap;
use std::time::Instant;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Logs one line per request, keyed by the route pattern so border lookups group together.
pub async fn tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let client_ip = client_ip(request.headers()).to_string();

    let start_time = Instant::now();
    let response = next.run(request).await;
    let processing_time_us = start_time.elapsed().as_micros();
    let status = response.status();

    if status.is_server_error() {
        tracing::warn!(
            task = "http_request",
            http_method = %method,
            endpoint = %endpoint,
            status = status.as_u16(),
            client_ip = %client_ip,
            processing_time_us,
        );
    } else {
        tracing::info!(
            task = "http_request",
            http_method = %method,
            endpoint = %endpoint,
            status = status.as_u16(),
            client_ip = %client_ip,
            processing_time_us,
        );
    }

    response
}

/// Originating client as reported by the first proxy hop.
pub fn client_ip(headers: &HeaderMap) -> &str {
    headers
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or("unknown")
}
