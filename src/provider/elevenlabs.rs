use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::{ProviderConfig, VoiceSettings},
    error::RelayError,
    http_client::http_client,
    types::{AudioResponse, SynthesisRequest},
};

/// `ElevenLabs` TTS provider
///
/// Holds the fixed voice/model identifiers and voice tuning from
/// configuration; per-request fields (text, latency hint, output format)
/// come from the caller.
pub struct ElevenLabs {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    voice_id: String,
    model_id: String,
    voice_settings: VoiceSettings,
}

#[derive(serde::Serialize)]
struct SynthesisBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
    optimize_streaming_latency: u32,
    output_format: &'a str,
}

impl ElevenLabs {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: http_client(),
            base_url: config.base_url,
            api_key: config.api_key,
            voice_id: config.voice_id,
            model_id: config.model_id,
            voice_settings: config.voice_settings,
        }
    }

    /// Synthesize text to speech via the provider's streaming endpoint
    ///
    /// One outbound call, no retries. Fails before the call is made when
    /// no API key is configured.
    pub async fn synthesize(&self, request: SynthesisRequest) -> crate::error::Result<AudioResponse> {
        let Some(api_key) = &self.api_key else {
            tracing::error!("synthesis request received but no provider API key is configured");
            return Err(RelayError::MissingApiKey);
        };

        let url = format!("{}/text-to-speech/{}/stream", self.base_url, self.voice_id);

        tracing::debug!(
            "ElevenLabs TTS request: model={}, voice={}, input_len={}",
            self.model_id,
            self.voice_id,
            request.text.len(),
        );

        let body = SynthesisBody {
            text: &request.text,
            model_id: &self.model_id,
            voice_settings: self.voice_settings,
            optimize_streaming_latency: request.optimize_streaming_latency,
            output_format: &request.output_format,
        };

        let response = self
            .client
            .post(&url)
            .header(http::header::ACCEPT, "audio/mpeg")
            .header("xi-api-key", api_key.expose_secret().to_string())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                RelayError::Synthesis(format!("failed to send request to ElevenLabs: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("ElevenLabs API error ({status}): {error_text}");

            return Err(if status.as_u16() == 401 {
                RelayError::Unauthorized
            } else {
                RelayError::Synthesis(format!("ElevenLabs returned {status}: {error_text}"))
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("failed to read ElevenLabs response body: {e}");
            RelayError::Synthesis(format!("failed to read provider response body: {e}"))
        })?;

        tracing::debug!("ElevenLabs TTS synthesis complete, {} bytes", audio.len());

        Ok(AudioResponse {
            audio: audio.to_vec(),
            content_type,
        })
    }
}
