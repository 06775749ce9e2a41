use crate::game::models::GameState;
use crate::session::errors::SessionError;
use hmac::Hmac;
use jwt::{SignWithKey, VerifyWithKey};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

pub const SESSION_VERSION: u32 = 1;

/// Claims carried in the session cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub version: u32,
    pub state: GameState,
}

pub fn encode(state: &GameState, key: &Hmac<Sha256>) -> Result<String, SessionError> {
    let claims = SessionClaims {
        version: SESSION_VERSION,
        state: state.clone(),
    };
    Ok(claims.sign_with_key(key)?)
}

pub fn decode(token: &str, key: &Hmac<Sha256>) -> Result<GameState, SessionError> {
    let claims: SessionClaims = token.verify_with_key(key)?;
    if claims.version != SESSION_VERSION {
        return Err(SessionError::UnsupportedVersion(claims.version));
    }
    Ok(claims.state)
}
