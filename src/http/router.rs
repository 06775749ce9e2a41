use crate::app_context::AppContext;
use crate::cli::Args;
use crate::{api, borders, health, pages};
use axum::{routing::get, routing::post, Router};

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = crate::http::cors(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let game_routes = Router::new()
        .route("/", get(api::handlers::game))
        .route("/guesses", post(api::handlers::guess))
        .route("/new", post(api::handlers::new_game));
    let api_routes = Router::new()
        .route("/countries", get(api::handlers::countries))
        .nest("/game", game_routes)
        .layer(cors_policy);

    Router::new()
        .route("/", get(pages::handlers::index).post(pages::handlers::submit))
        .route("/borders/:country", get(borders::handlers::border))
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .with_state(app_context)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
