//! Prefix-based autocomplete over the lexicon vocabulary

use crate::lexicon::{Language, Lexicon};
use serde::{Deserialize, Serialize};

/// Suggestions for one partial word, in the outbound result shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub partial_word: String,
    pub suggestions: Vec<String>,
    pub language: Language,
}

/// Collect vocabulary words starting with `partial`, sorted ascending and
/// truncated to `limit`
///
/// The prefix check is case-insensitive on both sides. An empty `partial`
/// yields an empty result: "no query" is distinct from "match everything",
/// and the boundary layer is expected to reject empty prefixes before
/// calling in.
pub fn suggest_words(
    lexicon: &Lexicon,
    partial: &str,
    language: Language,
    limit: usize,
) -> SuggestionResult {
    let prefix = partial.to_lowercase();

    let mut suggestions: Vec<String> = if prefix.is_empty() {
        Vec::new()
    } else {
        lexicon
            .vocabulary(language)
            .filter(|word| word.to_lowercase().starts_with(&prefix))
            .map(str::to_string)
            .collect()
    };
    suggestions.sort_unstable();
    suggestions.truncate(limit);

    SuggestionResult {
        partial_word: partial.to_string(),
        suggestions,
        language,
    }
}
