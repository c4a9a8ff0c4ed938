//! Word-substitution translation with coverage-based confidence
//!
//! Translation is strictly per-token: the input is lower-cased, split on
//! whitespace, and each token is replaced by its lexicon value when one
//! exists. Tokens missing from the lexicon pass through unchanged; that
//! fallback is deliberate policy, not an error, so partially covered input
//! still produces usable output. No punctuation stripping, reordering, or
//! morphology is attempted.

use crate::lexicon::{Direction, Lexicon};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of translating one text in one direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original: String,
    pub translated: String,
    /// Percentage of input tokens found in the lexicon, in `[0, 100]`,
    /// rounded to two decimal places
    pub confidence: f64,
    pub direction: Direction,
    pub timestamp: DateTime<Utc>,
}

/// Translate a single text in the given direction
///
/// Empty or all-whitespace input short-circuits to an empty translation
/// with confidence 0.0; no lexicon lookup is performed.
///
/// Confidence counts lexicon membership of the original (lower-cased)
/// tokens, independent of whether the substituted value happens to equal
/// the token itself.
pub fn translate_single(lexicon: &Lexicon, text: &str, direction: Direction) -> TranslationResult {
    if text.trim().is_empty() {
        return TranslationResult {
            original: text.to_string(),
            translated: String::new(),
            confidence: 0.0,
            direction,
            timestamp: Utc::now(),
        };
    }

    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut found = 0usize;
    let mut translated_tokens: Vec<&str> = Vec::with_capacity(tokens.len());
    for &token in &tokens {
        match lexicon.lookup(direction, token) {
            Some(value) => {
                found += 1;
                translated_tokens.push(value);
            }
            None => translated_tokens.push(token),
        }
    }

    let translated = translated_tokens.join(" ");
    let confidence = round2(found as f64 / tokens.len() as f64 * 100.0);

    debug!(%direction, tokens = tokens.len(), found, confidence, "translated text");

    TranslationResult {
        original: text.to_string(),
        translated,
        confidence,
        direction,
        timestamp: Utc::now(),
    }
}

/// Round to two decimal places, the precision of every score in the
/// external API
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_pairs(&[("hello", "sannu"), ("world", "aiye")])
    }

    // ========== Basic Translation Tests ==========

    #[test]
    fn test_full_coverage_translation() {
        let result = translate_single(&lexicon(), "Hello World", Direction::Forward);
        assert_eq!(result.translated, "sannu aiye");
        assert_eq!(result.confidence, 100.0);
        assert_eq!(result.original, "Hello World");
        assert_eq!(result.direction, Direction::Forward);
    }

    #[test]
    fn test_unmapped_token_passes_through() {
        let result = translate_single(&lexicon(), "hello there", Direction::Forward);
        assert_eq!(result.translated, "sannu there");
        assert_eq!(result.confidence, 50.0);
    }

    #[test]
    fn test_reverse_direction_uses_inverse_mapping() {
        let result = translate_single(&lexicon(), "sannu aiye", Direction::Reverse);
        assert_eq!(result.translated, "hello world");
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_zero_coverage_returns_input_unchanged() {
        let result = translate_single(&lexicon(), "xyz abc", Direction::Forward);
        assert_eq!(result.translated, "xyz abc");
        assert_eq!(result.confidence, 0.0);
    }

    // ========== Empty Input Tests ==========

    #[test]
    fn test_empty_text_short_circuits() {
        for direction in [Direction::Forward, Direction::Reverse] {
            let result = translate_single(&lexicon(), "", direction);
            assert_eq!(result.translated, "");
            assert_eq!(result.confidence, 0.0);
        }
    }

    #[test]
    fn test_whitespace_only_text_short_circuits() {
        let result = translate_single(&lexicon(), "   \t ", Direction::Forward);
        assert_eq!(result.original, "   \t ");
        assert_eq!(result.translated, "");
        assert_eq!(result.confidence, 0.0);
    }

    // ========== Tokenization Tests ==========

    #[test]
    fn test_whitespace_runs_collapse_to_single_spaces() {
        let result = translate_single(&lexicon(), "hello   \t world", Direction::Forward);
        assert_eq!(result.translated, "sannu aiye");
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        // "hello," is a distinct token and misses the lexicon
        let result = translate_single(&lexicon(), "hello, world", Direction::Forward);
        assert_eq!(result.translated, "hello, aiye");
        assert_eq!(result.confidence, 50.0);
    }

    // ========== Confidence Tests ==========

    #[test]
    fn test_confidence_rounded_to_two_decimals() {
        // 1 of 3 tokens found: 33.333… → 33.33
        let result = translate_single(&lexicon(), "hello two three", Direction::Forward);
        assert_eq!(result.confidence, 33.33);
    }

    #[test]
    fn test_confidence_bounds() {
        for text in ["hello", "hello world", "abc", "hello abc def"] {
            let confidence = translate_single(&lexicon(), text, Direction::Forward).confidence;
            assert!((0.0..=100.0).contains(&confidence));
            assert_eq!(round2(confidence), confidence);
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(100.0), 100.0);
    }
}
