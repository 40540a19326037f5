//! Shared implementation for OpenAI-compatible transcription APIs.
//!
//! The request format:
//! - Multipart form upload with `file`, `model`, `response_format` and
//!   `timestamp_granularities[]` fields
//! - Authorization via `Bearer` token
//! - `verbose_json` response carrying the transcript plus word timings
//!
//! This covers the hosted OpenAI Whisper API as well as self-hosted
//! OpenAI-compatible servers.

use anyhow::{Context, Result};
use serde::Deserialize;

use super::super::{TranscriptionRequest, TranscriptionResult, WordTiming};

/// `verbose_json` response body. Fields beyond `text` are optional so plain
/// `json` responses from compatible servers still parse.
#[derive(Deserialize)]
struct VerboseJsonResponse {
    text: String,
    #[serde(default)]
    words: Vec<WordTiming>,
    #[serde(default)]
    duration: Option<f64>,
}

/// Transcribe audio using an OpenAI-compatible API.
///
/// One attempt per call. Non-2xx statuses and parse failures are reported
/// with the response body attached so the caller can surface the service's
/// own message.
pub(crate) async fn openai_compatible_transcribe(
    client: &reqwest::Client,
    api_url: &str,
    model: &str,
    api_key: &str,
    request: TranscriptionRequest,
) -> Result<TranscriptionResult> {
    tracing::debug!(
        bytes = request.audio_data.len(),
        filename = %request.filename,
        language = request.language.map(|l| l.iso_code()),
        "sending transcription request"
    );

    let mut form = reqwest::multipart::Form::new()
        .text("model", model.to_string())
        .text("response_format", "verbose_json")
        .text("timestamp_granularities[]", "word")
        .part(
            "file",
            reqwest::multipart::Part::bytes(request.audio_data)
                .file_name(request.filename)
                .mime_str(&request.mime_type)?,
        );

    if let Some(language) = request.language {
        form = form.text("language", language.iso_code());
    }

    let response = client
        .post(api_url)
        .bearer_auth(api_key)
        .multipart(form)
        .send()
        .await
        .context("Failed to send request")?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        anyhow::bail!("API error ({status}): {error_text}");
    }

    let body = response.text().await.context("Failed to get response text")?;
    let parsed: VerboseJsonResponse =
        serde_json::from_str(&body).context("Failed to parse API response")?;

    tracing::debug!(
        chars = parsed.text.len(),
        words = parsed.words.len(),
        "transcription response received"
    );

    Ok(TranscriptionResult {
        text: parsed.text,
        words: parsed.words,
        duration: parsed.duration,
    })
}
