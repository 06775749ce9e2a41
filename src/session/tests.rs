use crate::game::models::{FilterSettings, GameState, Guess};
use crate::geodesy::models::Bearing;
use crate::session::cookie::{self, MAX_COOKIE_BYTES, SESSION_COOKIE_NAME};
use crate::session::errors::SessionError;
use crate::session::token::SessionClaims;
use crate::session::SessionCodec;
use hmac::{Hmac, Mac};
use http::header::{HeaderMap, HeaderValue, COOKIE, SET_COOKIE};
use jwt::SignWithKey;
use sha2::Sha256;

fn sample_state() -> GameState {
    let mut state = GameState::new(String::from("Beta"), FilterSettings::default(), 3);
    state
        .guesses
        .push(Guess::new(String::from("Alpha"), 111.31884502145034, Bearing::East));
    state.pending_text = String::from("Gam");
    state
}

#[test]
fn test_encoded_state_decodes_unchanged() {
    let codec = SessionCodec::new("testKey", 30);
    let state = sample_state();

    let token = codec.encode(&state).unwrap();

    assert_eq!(codec.decode(&token).unwrap(), state);
}

#[test]
fn test_token_signed_with_another_key_is_rejected() {
    let token = SessionCodec::new("someOtherKey", 30)
        .encode(&sample_state())
        .unwrap();

    let result = SessionCodec::new("testKey", 30).decode(&token);

    assert!(matches!(result, Err(SessionError::Token(_))));
}

#[test]
fn test_tampered_token_is_rejected() {
    let codec = SessionCodec::new("testKey", 30);
    let forged = SessionCodec::new("forger", 30)
        .encode(&GameState::new(String::from("Alpha"), FilterSettings::default(), 3))
        .unwrap();
    let token = codec.encode(&sample_state()).unwrap();
    let forged_payload = forged.split('.').nth(1).unwrap();
    let mut parts: Vec<&str> = token.split('.').collect();
    parts[1] = forged_payload;

    let result = codec.decode(&parts.join("."));

    assert!(matches!(result, Err(SessionError::Token(_))));
}

#[test]
fn test_garbage_is_rejected() {
    let codec = SessionCodec::new("testKey", 30);

    assert!(codec.decode("").is_err());
    assert!(codec.decode("notReallyAToken").is_err());
    assert!(codec.decode("a.b.c").is_err());
}

#[test]
fn test_unsupported_version_is_rejected() {
    let key: Hmac<Sha256> = Hmac::new_from_slice(b"testKey").unwrap();
    let token = SessionClaims {
        version: 99,
        state: sample_state(),
    }
    .sign_with_key(&key)
    .unwrap();

    let result = SessionCodec::new("testKey", 30).decode(&token);

    assert!(matches!(result, Err(SessionError::UnsupportedVersion(99))));
}

#[test]
fn test_cookie_is_read_among_others() {
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_static("theme=dark; worldle_session=abc.def.ghi; lang=en"),
    );

    assert_eq!(
        cookie::read(&headers, SESSION_COOKIE_NAME),
        Some("abc.def.ghi")
    );
    assert_eq!(cookie::read(&headers, "missing"), None);
    assert_eq!(cookie::read(&HeaderMap::new(), SESSION_COOKIE_NAME), None);
}

#[test]
fn test_cookie_headers() {
    let codec = SessionCodec::new("testKey", 2);

    let headers = codec.cookie_headers(&sample_state()).unwrap();

    let value = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(value.starts_with("worldle_session="));
    assert!(value.contains("HttpOnly"));
    assert!(value.ends_with("Max-Age=172800"));
}

fn state_with_guesses(count: usize) -> GameState {
    let mut state = sample_state();
    state.guesses = (0..count)
        .map(|_| Guess::new(String::from("Switzerland"), 10_234.4, Bearing::NorthEast))
        .collect();
    state
}

#[test]
fn test_guesses_are_stored_as_triples() {
    let guess = Guess::new(String::from("Alpha"), 111.31884502145034, Bearing::East);

    let stored = serde_json::to_value(&guess).unwrap();

    assert_eq!(stored, serde_json::json!(["Alpha", 111, 0]));
    assert_eq!(serde_json::from_value::<Guess>(stored).unwrap(), guess);
    assert!(serde_json::from_value::<Guess>(serde_json::json!(["Alpha", 111, 9])).is_err());
}

#[test]
fn test_long_history_fits_in_one_cookie() {
    let codec = SessionCodec::new("testKey", 30);
    let state = state_with_guesses(60);

    let headers = codec.cookie_headers(&state).unwrap();

    let value = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(value.len() <= MAX_COOKIE_BYTES);
    let request_headers = headers_with_cookie(value);
    let token = cookie::read(&request_headers, SESSION_COOKIE_NAME).unwrap();
    assert_eq!(codec.decode(token).unwrap(), state);
}

#[test]
fn test_oversized_cookie_is_refused() {
    let codec = SessionCodec::new("testKey", 30);

    let result = codec.cookie_headers(&state_with_guesses(400));

    assert!(matches!(
        result,
        Err(SessionError::TooLarge { size, limit: MAX_COOKIE_BYTES }) if size > MAX_COOKIE_BYTES
    ));
}

fn headers_with_cookie(set_cookie: &str) -> HeaderMap {
    let pair = set_cookie.split(';').next().unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(pair).unwrap());
    headers
}
