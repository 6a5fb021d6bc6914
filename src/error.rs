use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Convenience alias used by handlers
pub type Result<T> = std::result::Result<T, RelayError>;

/// Errors surfaced to API consumers as `{ "error": string }` bodies
///
/// None of these are retried or recovered locally, and none are fatal
/// to the process.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Client sent a malformed or invalid request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The provider API key is not configured on the server
    #[error("provider API key is not configured on the server")]
    MissingApiKey,

    /// The provider rejected the configured credentials
    #[error("unauthorized: the provider rejected the configured API key")]
    Unauthorized,

    /// Any other upstream or transport failure
    #[error("synthesis failed: {0}")]
    Synthesis(String),
}

impl RelayError {
    /// HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MissingApiKey | Self::Synthesis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to expose to API consumers
    ///
    /// Upstream detail for synthesis failures goes to the log only.
    pub fn client_message(&self) -> String {
        match self {
            Self::Synthesis(_) => "failed to synthesize speech".to_owned(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.client_message() });
        (self.status_code(), Json(body)).into_response()
    }
}
