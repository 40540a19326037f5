//! Hosted OpenAI Whisper transcription provider.
//!
//! Constructed explicitly with its HTTP client and credential so frontends
//! and tests decide where those come from; there is no process-global state.

use anyhow::Result;
use async_trait::async_trait;

use super::base::openai_compatible_transcribe;
use super::{TranscriptionBackend, TranscriptionRequest, TranscriptionResult};
use crate::config::Config;

/// OpenAI Whisper API provider
#[derive(Clone)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            api_url: api_url.into(),
            model: model.into(),
        }
    }

    /// Build a provider from loaded [`Config`]
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(client, &config.api_key, &config.api_url, &config.model)
    }
}

impl std::fmt::Debug for OpenAiProvider {
    // Never print the credential
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TranscriptionBackend for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn transcribe(&self, request: TranscriptionRequest) -> Result<TranscriptionResult> {
        openai_compatible_transcribe(
            &self.client,
            &self.api_url,
            &self.model,
            &self.api_key,
            request,
        )
        .await
    }
}
