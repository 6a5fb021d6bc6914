use serde::Deserialize;

/// Inbound synthesis request
///
/// Constructed per call and discarded after forwarding to the provider.
#[derive(Debug, Deserialize)]
pub struct SynthesisRequest {
    /// Text to synthesize into speech
    pub text: String,
    /// Provider hint biasing its buffering/latency trade-off
    #[serde(default = "default_streaming_latency")]
    pub optimize_streaming_latency: u32,
    /// Provider output format (e.g. "`mp3_44100_128`")
    #[serde(default = "default_output_format")]
    pub output_format: String,
}

const fn default_streaming_latency() -> u32 {
    1
}

fn default_output_format() -> String {
    "mp3_44100_128".to_owned()
}

/// Raw audio payload from the provider, forwarded unmodified
pub struct AudioResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

impl AudioResponse {
    /// Convert the audio payload into an axum HTTP response
    pub fn into_response(self) -> axum::response::Response {
        axum::response::Response::builder()
            .header(http::header::CONTENT_TYPE, self.content_type)
            .body(axum::body::Body::from(self.audio))
            .unwrap_or_else(|_| {
                axum::response::Response::builder()
                    .status(http::StatusCode::INTERNAL_SERVER_ERROR)
                    .body(axum::body::Body::empty())
                    .unwrap()
            })
    }
}
