use http::header::{HeaderMap, COOKIE};

pub const SESSION_COOKIE_NAME: &str = "worldle_session";
/// Per-cookie limit browsers enforce on `name=value` plus attributes.
pub const MAX_COOKIE_BYTES: usize = 4096;

/// Value of the `name` cookie in the request's `Cookie` headers, if any.
pub fn read<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

pub fn set_cookie(token: &str, max_age_secs: u64) -> String {
    format!("{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}
