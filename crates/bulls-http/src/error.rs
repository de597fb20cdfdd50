use bulls_core::error::BullsError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t parse body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("backend returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("invalid base URL: `{0}`")]
    InvalidUrl(String),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<HttpError> for BullsError {
    fn from(value: HttpError) -> Self {
        BullsError::Backend(Box::new(value))
    }
}
