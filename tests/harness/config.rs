//! Configuration builder for tests

use std::net::SocketAddr;

use secrecy::SecretString;
use voxrelay::config::{Config, CorsConfig, ProviderConfig, VoiceSettings};

/// Builds a relay `Config` pointed at a mock provider
pub struct ConfigBuilder {
    base_url: String,
    api_key: Option<String>,
    voice_id: String,
    model_id: String,
    origins: Vec<String>,
}

impl ConfigBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: Some("test-key".to_string()),
            voice_id: "test-voice".to_string(),
            model_id: "test-model".to_string(),
            origins: vec!["http://localhost:8000".to_string()],
        }
    }

    pub fn without_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    pub fn with_origins(mut self, origins: &[&str]) -> Self {
        self.origins = origins.iter().map(ToString::to_string).collect();
        self
    }

    pub fn build(self) -> Config {
        Config {
            // Unused: the test server binds its own port 0 listener
            listen_address: SocketAddr::from(([127, 0, 0, 1], 0)),
            provider: ProviderConfig {
                api_key: self.api_key.map(SecretString::from),
                voice_id: self.voice_id,
                model_id: self.model_id,
                base_url: self.base_url,
                voice_settings: VoiceSettings {
                    stability: 0.75,
                    similarity_boost: 0.75,
                },
            },
            cors: CorsConfig { origins: self.origins },
        }
    }
}
