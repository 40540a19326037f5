//! Core library for scribe: turn an uploaded audio file into text using a
//! hosted Whisper-compatible transcription API.
//!
//! The frontends (`scribe` CLI and `scribe-web`) are thin layers over this
//! crate. It provides:
//! - [`config`]: environment-based configuration (API key, endpoint, model)
//! - [`language`]: the catalogue of supported spoken languages
//! - [`provider`]: the transcription backend trait and the OpenAI client
//! - [`staging`]: validation and temp-file staging of uploaded audio
//! - [`clipboard`]: copying a transcript to the system clipboard

#[cfg(feature = "clipboard")]
pub mod clipboard;
pub mod config;
pub mod language;
pub mod provider;
pub mod staging;

#[cfg(feature = "clipboard")]
pub use clipboard::copy_to_clipboard;
pub use config::Config;
pub use language::Language;
pub use provider::{
    DEFAULT_TIMEOUT_SECS, OpenAiProvider, TranscriptionBackend, TranscriptionRequest,
    TranscriptionResult, WordTiming, build_http_client,
};
pub use staging::{AudioPayload, StagedUpload};
