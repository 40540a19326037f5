//! Transcription providers.
//!
//! A provider turns a [`TranscriptionRequest`] into a [`TranscriptionResult`]
//! with one outbound call to a hosted speech-to-text API. Frontends hold an
//! `Arc<dyn TranscriptionBackend>` so tests can substitute a fake.

mod base;
mod openai;

pub use openai::OpenAiProvider;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Request timeout for transcription uploads (large files take a while)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// One audio file plus options, ready to send to a provider
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Raw audio bytes
    pub audio_data: Vec<u8>,
    /// Original filename, forwarded as the multipart part name
    pub filename: String,
    /// MIME type derived from the file extension
    pub mime_type: String,
    /// Language hint; `None` lets the service auto-detect
    pub language: Option<Language>,
}

/// A single word with its position in the audio, from verbose responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTiming {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

/// Outcome of a transcription call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// Full transcript text
    pub text: String,
    /// Word-level timestamps; present with verbose responses, unused by the UI
    #[serde(default)]
    pub words: Vec<WordTiming>,
    /// Audio duration in seconds, when the service reports it
    #[serde(default)]
    pub duration: Option<f64>,
}

/// A speech-to-text service
#[async_trait]
pub trait TranscriptionBackend: Send + Sync {
    /// Short identifier, used in logs
    fn name(&self) -> &'static str;

    /// Send one transcription request. A single attempt: no retry, no
    /// backoff. Any failure (network, auth, malformed response) is returned
    /// with the underlying message attached.
    async fn transcribe(&self, request: TranscriptionRequest) -> Result<TranscriptionResult>;
}

/// Build the shared HTTP client used for all provider calls.
///
/// # Errors
///
/// Returns an error if the TLS backend fails to initialize.
pub fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .context("Failed to create HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_deserializes_without_optional_fields() {
        let json = r#"{"text":"hello world"}"#;
        let result: TranscriptionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.text, "hello world");
        assert!(result.words.is_empty());
        assert!(result.duration.is_none());
    }

    #[test]
    fn word_timing_deserializes() {
        let json = r#"{"word":"hello","start":0.0,"end":0.42}"#;
        let timing: WordTiming = serde_json::from_str(json).unwrap();
        assert_eq!(timing.word, "hello");
        assert!(timing.end > timing.start);
    }
}
