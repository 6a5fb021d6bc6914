//! Environment-driven configuration
//!
//! Loaded once at startup and injected into the server; never mutated
//! afterward. All variables have defaults except the provider API key,
//! which may be absent — requests then fail with a misconfiguration
//! error rather than the process refusing to start.
//!
//! | Variable                  | Default                                |
//! |---------------------------|----------------------------------------|
//! | `PORT`                    | `3000`                                 |
//! | `ELEVENLABS_API_KEY`      | unset                                  |
//! | `VOICE_ID`                | `ZF6FPAbjXT4488VcRRnw`                 |
//! | `TTS_MODEL_ID`            | `eleven_multilingual_v2`               |
//! | `ELEVENLABS_BASE_URL`     | `https://api.elevenlabs.io/v1`         |
//! | `VOICE_STABILITY`         | `0.75`                                 |
//! | `VOICE_SIMILARITY_BOOST`  | `0.75`                                 |
//! | `ALLOWED_ORIGINS`         | `http://localhost:8000,...` (see below)|

use std::net::SocketAddr;

use anyhow::Context;
use secrecy::SecretString;
use serde::Serialize;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_VOICE_ID: &str = "ZF6FPAbjXT4488VcRRnw";
const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";
const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";
const DEFAULT_STABILITY: f32 = 0.75;
const DEFAULT_SIMILARITY_BOOST: f32 = 0.75;
const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:8000,http://127.0.0.1:8000,http://127.0.0.1:5500";

/// Top-level relay configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the relay listens on
    pub listen_address: SocketAddr,
    /// Upstream TTS provider settings
    pub provider: ProviderConfig,
    /// Cross-origin access settings
    pub cors: CorsConfig,
}

/// Settings for the upstream ElevenLabs provider
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key; absent means synthesis requests fail as misconfigured
    pub api_key: Option<SecretString>,
    /// Voice selected for synthesis
    pub voice_id: String,
    /// Underlying synthesis model
    pub model_id: String,
    /// Base URL of the provider API
    pub base_url: String,
    /// Voice tuning passed with every synthesis call
    pub voice_settings: VoiceSettings,
}

/// Voice tuning forwarded verbatim in the provider request body
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed origins; a single `*` entry allows any origin
    pub origins: Vec<String>,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric variable is set but unparseable.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: `{raw}`"))?,
            Err(_) => DEFAULT_PORT,
        };

        // An empty key is as useless as an absent one; treat them alike.
        let api_key = std::env::var("ELEVENLABS_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(SecretString::from);

        let provider = ProviderConfig {
            api_key,
            voice_id: env_or("VOICE_ID", DEFAULT_VOICE_ID),
            model_id: env_or("TTS_MODEL_ID", DEFAULT_MODEL_ID),
            base_url: env_or("ELEVENLABS_BASE_URL", DEFAULT_BASE_URL),
            voice_settings: VoiceSettings {
                stability: env_f32("VOICE_STABILITY", DEFAULT_STABILITY)?,
                similarity_boost: env_f32("VOICE_SIMILARITY_BOOST", DEFAULT_SIMILARITY_BOOST)?,
            },
        };

        let cors = CorsConfig {
            origins: parse_origins(&env_or("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)),
        };

        Ok(Self {
            listen_address: SocketAddr::from(([0, 0, 0, 0], port)),
            provider,
            cors,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_f32(name: &str, default: f32) -> anyhow::Result<f32> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<f32>()
            .with_context(|| format!("invalid {name} value: `{raw}`")),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
