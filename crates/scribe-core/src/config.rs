//! Environment-based configuration.
//!
//! The API credential is read once at startup. There is no dynamic reload;
//! a missing key is a startup error the caller surfaces and exits on.

use anyhow::{Context, Result};

/// Environment variable holding the bearer token for the transcription API
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Optional override for the transcription endpoint
pub const API_URL_ENV: &str = "SCRIBE_API_URL";
/// Optional override for the model identifier
pub const MODEL_ENV: &str = "SCRIBE_MODEL";

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
const DEFAULT_MODEL: &str = "whisper-1";

/// Settings for talking to the transcription service
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is unset or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .with_context(|| {
                format!("{API_KEY_ENV} is not set. Export it or add it to a .env file.")
            })?;

        let api_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            api_url,
            model,
        })
    }
}

impl std::fmt::Debug for Config {
    // Never print the credential
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
