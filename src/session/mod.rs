use crate::cli::Args;
use crate::game::models::GameState;
use cookie::MAX_COOKIE_BYTES;
use errors::SessionError;
use hmac::{Hmac, Mac};
use http::header::{HeaderMap, HeaderValue, SET_COOKIE};
use sha2::Sha256;

pub mod cookie;
pub mod errors;
pub mod extractors;
pub mod token;
#[cfg(test)]
pub mod tests;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Signs and verifies the game state stored in the session cookie.
#[derive(Clone)]
pub struct SessionCodec {
    key: Hmac<Sha256>,
    max_age_secs: u64,
}

impl SessionCodec {
    pub fn new(signing_key: &str, max_age_days: u64) -> Self {
        let key = Hmac::new_from_slice(signing_key.as_bytes())
            .expect("Failed to create the session signing key!");
        Self {
            key,
            max_age_secs: max_age_days.saturating_mul(SECONDS_PER_DAY),
        }
    }

    pub fn encode(&self, state: &GameState) -> Result<String, SessionError> {
        token::encode(state, &self.key)
    }

    pub fn decode(&self, token: &str) -> Result<GameState, SessionError> {
        token::decode(token, &self.key)
    }

    /// `Set-Cookie` headers storing `state`, or `TooLarge` when browsers would drop the cookie.
    pub fn cookie_headers(&self, state: &GameState) -> Result<HeaderMap, SessionError> {
        let token = self.encode(state).inspect_err(|err| {
            tracing::error!(task = "session_encode", error = %err, "Failed to encode a session.");
        })?;
        let cookie = cookie::set_cookie(&token, self.max_age_secs);
        if cookie.len() > MAX_COOKIE_BYTES {
            tracing::warn!(
                task = "session_encode",
                size = cookie.len(),
                guesses = state.guesses.len(),
                "Session cookie is too large to be stored."
            );
            return Err(SessionError::TooLarge {
                size: cookie.len(),
                limit: MAX_COOKIE_BYTES,
            });
        }
        let mut headers = HeaderMap::new();
        headers.insert(SET_COOKIE, HeaderValue::from_str(&cookie)?);
        Ok(headers)
    }
}

pub fn init(args: &Args) -> SessionCodec {
    SessionCodec::new(&args.session_signing_key, args.session_max_age_days)
}
