use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session token could not be signed or verified")]
    Token(#[from] jwt::Error),
    #[error("session token has unsupported version {0}")]
    UnsupportedVersion(u32),
    #[error("session cookie is {size} bytes, browsers keep at most {limit}")]
    TooLarge { size: usize, limit: usize },
    #[error("session cookie is not a valid header value")]
    Header(#[from] http::header::InvalidHeaderValue),
}
