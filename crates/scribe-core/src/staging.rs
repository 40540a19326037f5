//! Upload staging.
//!
//! Incoming audio is validated against an extension allow-list (no content
//! sniffing) and written to a uniquely named temp file per upload. Each
//! session owns its own staged file, so concurrent sessions cannot clobber
//! one another; dropping the handle deletes the file.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::language::Language;
use crate::provider::TranscriptionRequest;

/// Extensions accepted by the upload filter
pub const ALLOWED_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a"];

/// Audio bytes plus the metadata needed to send them to a provider
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

impl AudioPayload {
    /// Combine with a language selection into a provider request
    pub fn into_request(self, language: Option<Language>) -> TranscriptionRequest {
        TranscriptionRequest {
            audio_data: self.bytes,
            filename: self.filename,
            mime_type: self.mime_type,
            language,
        }
    }
}

/// An uploaded audio file persisted to a temp path on disk
#[derive(Debug)]
pub struct StagedUpload {
    file: NamedTempFile,
    filename: String,
    mime_type: String,
    size: usize,
}

impl StagedUpload {
    /// Validate and write an uploaded buffer to a fresh temp file.
    ///
    /// # Errors
    ///
    /// Returns an error if the filename's extension is not in the
    /// allow-list, or if the temp file cannot be created or written.
    pub fn stage(bytes: &[u8], original_filename: &str) -> Result<Self> {
        let extension = validate_extension(original_filename)?;
        let mime_type = mime_for_extension(extension);

        let mut file = tempfile::Builder::new()
            .prefix("scribe-upload-")
            .suffix(&format!(".{extension}"))
            .tempfile()
            .context("Failed to create staging file")?;
        file.write_all(bytes).context("Failed to write staging file")?;
        file.flush().context("Failed to flush staging file")?;

        tracing::debug!(
            path = %file.path().display(),
            bytes = bytes.len(),
            "staged upload"
        );

        Ok(Self {
            file,
            filename: original_filename.to_string(),
            mime_type: mime_type.to_string(),
            size: bytes.len(),
        })
    }

    /// Path of the staged file on disk
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Original filename as uploaded
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Read the staged bytes back for a transcription attempt. Each attempt
    /// re-reads the same file, so retries resend identical content.
    ///
    /// # Errors
    ///
    /// Returns an error if the staged file can no longer be read.
    pub fn payload(&self) -> Result<AudioPayload> {
        let bytes = std::fs::read(self.path()).with_context(|| {
            format!("Failed to read staged audio at {}", self.path().display())
        })?;
        Ok(AudioPayload {
            bytes,
            filename: self.filename.clone(),
            mime_type: self.mime_type.clone(),
        })
    }
}

/// Read a local audio file directly (CLI path, no staging copy).
///
/// # Errors
///
/// Returns an error for a disallowed extension or an unreadable file.
pub fn read_audio_file(path: &Path) -> Result<AudioPayload> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("Invalid audio file path")?
        .to_string();
    let extension = validate_extension(&filename)?;
    let mime_type = mime_for_extension(extension).to_string();
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read audio file {}", path.display()))?;
    Ok(AudioPayload {
        bytes,
        filename,
        mime_type,
    })
}

/// Check a filename against the allow-list, returning its extension
fn validate_extension(filename: &str) -> Result<&str> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str());
    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)) => Ok(ext),
        Some(ext) => anyhow::bail!(
            "Unsupported audio format: .{ext}. Supported: MP3, WAV, M4A"
        ),
        None => anyhow::bail!("File has no extension. Supported: MP3, WAV, M4A"),
    }
}

fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_and_reads_back_identical_bytes() {
        let bytes = b"RIFF fake wav content";
        let staged = StagedUpload::stage(bytes, "clip.wav").unwrap();
        assert_eq!(staged.size(), bytes.len());
        assert_eq!(staged.mime_type(), "audio/wav");
        let payload = staged.payload().unwrap();
        assert_eq!(payload.bytes, bytes);
        assert_eq!(payload.filename, "clip.wav");
    }

    #[test]
    fn two_uploads_get_distinct_paths() {
        let first = StagedUpload::stage(b"one", "a.mp3").unwrap();
        let second = StagedUpload::stage(b"two", "b.mp3").unwrap();
        assert_ne!(first.path(), second.path());
    }

    #[test]
    fn dropping_removes_the_staged_file() {
        let staged = StagedUpload::stage(b"bytes", "clip.m4a").unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());
        drop(staged);
        assert!(!path.exists());
    }

    #[test]
    fn rejects_disallowed_extensions() {
        assert!(StagedUpload::stage(b"x", "notes.txt").is_err());
        assert!(StagedUpload::stage(b"x", "archive.ogg").is_err());
        assert!(StagedUpload::stage(b"x", "noextension").is_err());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let staged = StagedUpload::stage(b"x", "CLIP.MP3").unwrap();
        assert_eq!(staged.mime_type(), "audio/mpeg");
    }

    #[test]
    fn payload_converts_into_request_with_language() {
        use crate::language::Language;
        let staged = StagedUpload::stage(b"abc", "clip.wav").unwrap();
        let request = staged
            .payload()
            .unwrap()
            .into_request(Some(Language::German));
        assert_eq!(request.audio_data, b"abc");
        assert_eq!(request.language, Some(Language::German));
    }
}
