use serde::{Deserialize, Serialize};
use std::fmt;

/// Spoken languages the UI offers for transcription.
///
/// The language hint sent to the API is an ISO 639-1 code from an explicit
/// table, not a truncation of the display name (truncation produces invalid
/// codes for languages like German or Chinese).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Chinese,
    Japanese,
    Korean,
    Hindi,
    Arabic,
    Urdu,
}

impl Language {
    /// ISO 639-1 code understood by the transcription service
    pub fn iso_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Hindi => "hi",
            Language::Arabic => "ar",
            Language::Urdu => "ur",
        }
    }

    /// Human-readable name shown in language selectors
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Hindi => "Hindi",
            Language::Arabic => "Arabic",
            Language::Urdu => "Urdu",
        }
    }

    /// List all supported languages, in selector order
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Spanish,
            Language::French,
            Language::German,
            Language::Chinese,
            Language::Japanese,
            Language::Korean,
            Language::Hindi,
            Language::Arabic,
            Language::Urdu,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    /// Accepts either the display name or the ISO code, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "spanish" | "es" => Ok(Language::Spanish),
            "french" | "fr" => Ok(Language::French),
            "german" | "de" => Ok(Language::German),
            "chinese" | "zh" => Ok(Language::Chinese),
            "japanese" | "ja" => Ok(Language::Japanese),
            "korean" | "ko" => Ok(Language::Korean),
            "hindi" | "hi" => Ok(Language::Hindi),
            "arabic" | "ar" => Ok(Language::Arabic),
            "urdu" | "ur" => Ok(Language::Urdu),
            _ => Err(format!(
                "Unknown language: {}. Available: {}",
                s,
                Language::all()
                    .iter()
                    .map(|l| l.display_name())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}
