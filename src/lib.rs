#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod config;
mod cors;
mod error;
mod http_client;
mod provider;
mod request;
mod server;
pub mod telemetry;
mod types;

use std::sync::Arc;

use axum::{Router, extract::State, routing::post};

pub use error::{RelayError, Result};
pub use server::Server;
pub use types::{AudioResponse, SynthesisRequest};
use provider::elevenlabs::ElevenLabs;
use request::ExtractPayload;

/// Create the endpoint router for speech synthesis
pub(crate) fn endpoint_router() -> Router<Arc<ElevenLabs>> {
    Router::new().route("/synthesize", post(synthesize))
}

/// Handle speech synthesis requests
async fn synthesize(
    State(provider): State<Arc<ElevenLabs>>,
    ExtractPayload(request): ExtractPayload<SynthesisRequest>,
) -> Result<axum::response::Response> {
    if request.text.is_empty() {
        return Err(RelayError::InvalidRequest("text is required".to_owned()));
    }

    tracing::debug!("synthesis handler called, input_len={}", request.text.len());

    let response = provider.synthesize(request).await?;

    tracing::debug!("speech synthesis complete");

    Ok(response.into_response())
}
