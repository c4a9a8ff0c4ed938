//! Language detection from relative dictionary-hit counts

use crate::lexicon::{Direction, Lexicon};
use serde::{Deserialize, Serialize};

/// Outcome of language detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedLanguage {
    English,
    Igala,
    Unknown,
}

impl std::fmt::Display for DetectedLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectedLanguage::English => write!(f, "english"),
            DetectedLanguage::Igala => write!(f, "igala"),
            DetectedLanguage::Unknown => write!(f, "unknown"),
        }
    }
}

/// Detection outcome paired with the text it was computed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub text: String,
    pub detected_language: DetectedLanguage,
}

/// Guess the source language of `text` by counting how many of its tokens
/// appear on each side of the lexicon
///
/// Strictly more English-side hits means `English`, strictly fewer means
/// `Igala`, and a tie (including zero hits on both sides, or empty input)
/// means `Unknown`.
pub fn detect_language(lexicon: &Lexicon, text: &str) -> DetectedLanguage {
    if text.trim().is_empty() {
        return DetectedLanguage::Unknown;
    }

    let lowered = text.to_lowercase();
    let mut english_hits = 0usize;
    let mut igala_hits = 0usize;
    for token in lowered.split_whitespace() {
        if lexicon.contains(Direction::Forward, token) {
            english_hits += 1;
        }
        if lexicon.contains(Direction::Reverse, token) {
            igala_hits += 1;
        }
    }

    if english_hits > igala_hits {
        DetectedLanguage::English
    } else if igala_hits > english_hits {
        DetectedLanguage::Igala
    } else {
        DetectedLanguage::Unknown
    }
}

/// [`detect_language`] wrapped in the outbound result shape
pub fn detect(lexicon: &Lexicon, text: &str) -> DetectionResult {
    DetectionResult {
        text: text.to_string(),
        detected_language: detect_language(lexicon, text),
    }
}
