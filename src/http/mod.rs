use crate::cli::Args;
use http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub mod middleware;
pub mod router;

/// CORS policy for the JSON API. Origins that are not valid header values are skipped.
pub fn cors(args: &Args) -> CorsLayer {
    let origins: Vec<HeaderValue> = args
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring an invalid allowed origin.");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_credentials(true)
}
