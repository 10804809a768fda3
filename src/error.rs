use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failure of a single outbound provider call
///
/// These never reach the client. The suggestion chain and the metadata fetcher
/// log them and degrade to an empty result.
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    /// Never carries a URL; see the `From` impl below
    #[error("HTTP client error: {0}")]
    Transport(reqwest::Error),

    #[error("Provider returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Provider returned an empty completion")]
    EmptyCompletion,

    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ProviderError {
    /// Request URLs can carry credentials, so they are dropped before the
    /// error is formatted into any log line.
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Transport(e.without_url())
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("AI failed to generate recommendations")]
    NoRecommendations,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NoRecommendations => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
