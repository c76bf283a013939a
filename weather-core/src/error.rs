use reqwest::StatusCode;
use thiserror::Error;

/// Why a current-weather fetch did not produce a snapshot.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather provider failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("weather provider answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected weather payload: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
