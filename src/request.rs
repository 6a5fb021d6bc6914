use axum::Json;
use axum::body::Body;
use axum::response::IntoResponse;
use serde::de::DeserializeOwned;

use crate::error::RelayError;

/// Extractor for JSON request bodies
///
/// Rejections carry the relay's `{ "error": string }` shape instead of
/// axum's plaintext defaults.
pub struct ExtractPayload<T>(pub T);

/// Body limit for synthesis requests (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

impl<S, T: DeserializeOwned> axum::extract::FromRequest<S> for ExtractPayload<T>
where
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let body = request.into_body();

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err)
                .is_some_and(|source| source.is::<http_body_util::LengthLimitError>())
            {
                (
                    http::StatusCode::PAYLOAD_TOO_LARGE,
                    Json(serde_json::json!({
                        "error": format!("request body is too large, limit is {BODY_LIMIT_BYTES} bytes"),
                    })),
                )
                    .into_response()
            } else {
                RelayError::InvalidRequest(format!("failed to read request body: {err}")).into_response()
            }
        })?;

        let body = serde_json::from_slice::<T>(&bytes).map_err(|e| {
            RelayError::InvalidRequest(format!("failed to parse request body: {e}")).into_response()
        })?;

        Ok(Self(body))
    }
}
