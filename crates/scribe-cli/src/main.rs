//! scribe: transcribe an audio file from the command line.
//!
//! Same core as the web UI: one request per invocation to the configured
//! OpenAI-compatible API, transcript printed to stdout, optionally copied to
//! the clipboard or written to a text file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scribe_core::{
    Config, Language, OpenAiProvider, TranscriptionBackend, build_http_client,
    staging::read_audio_file,
};

#[derive(Parser, Debug)]
#[command(name = "scribe", version, about = "Transcribe audio files (MP3, WAV, M4A)")]
struct Cli {
    /// Audio file to transcribe
    file: PathBuf,

    /// Spoken language, by name or ISO code (e.g. "German" or "de")
    #[arg(short, long, default_value = "English")]
    language: Language,

    /// Copy the transcript to the system clipboard
    #[arg(long)]
    copy: bool,

    /// Write the transcript to a text file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let config = Config::from_env()?;
    let provider = OpenAiProvider::from_config(build_http_client()?, &config);

    let payload = read_audio_file(&cli.file)?;
    let request = payload.into_request(Some(cli.language));
    let result = provider.transcribe(request).await?;

    println!("{}", result.text);

    if cli.copy {
        scribe_core::copy_to_clipboard(&result.text)?;
        eprintln!("Transcript copied to clipboard.");
    }

    if let Some(path) = cli.output {
        std::fs::write(&path, &result.text)
            .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
        eprintln!("Transcript written to {}.", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_language_by_name_or_code() {
        let cli = Cli::parse_from(["scribe", "talk.mp3", "--language", "de"]);
        assert_eq!(cli.language, Language::German);
        let cli = Cli::parse_from(["scribe", "talk.mp3", "-l", "Japanese"]);
        assert_eq!(cli.language, Language::Japanese);
    }

    #[test]
    fn defaults_to_english() {
        let cli = Cli::parse_from(["scribe", "talk.mp3"]);
        assert_eq!(cli.language, Language::English);
        assert!(!cli.copy);
        assert!(cli.output.is_none());
    }
}
