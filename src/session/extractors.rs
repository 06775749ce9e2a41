use crate::app_context::AppContext;
use crate::game::models::GameState;
use crate::session::cookie::{self, SESSION_COOKIE_NAME};
use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use std::convert::Infallible;

/// Game state carried by the request's session cookie. `None` when the cookie is missing or
/// cannot be trusted; such requests start a new game instead of failing.
pub struct StoredGame(pub Option<GameState>);

#[async_trait]
impl<S> FromRequestParts<S> for StoredGame
where
    AppContext: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = cookie::read(&parts.headers, SESSION_COOKIE_NAME) else {
            return Ok(StoredGame(None));
        };
        let app_context = AppContext::from_ref(state);
        match app_context.sessions.decode(token) {
            Ok(game) => Ok(StoredGame(Some(game))),
            Err(err) => {
                tracing::debug!(
                    task = "session_decode",
                    error = %err,
                    "Ignoring an unusable session cookie."
                );
                Ok(StoredGame(None))
            }
        }
    }
}
