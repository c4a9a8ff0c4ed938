//! Bilingual lexicon built from a parallel English-Igala word list
//!
//! The lexicon holds two single-valued lookup mappings derived from the same
//! entry set: a forward mapping (English → Igala) and an inverse mapping
//! (Igala → English). Both are built exactly once and never mutated
//! afterwards, so a `Lexicon` can be shared freely across threads (typically
//! behind an `Arc`) without locking.

use crate::corpus::{CorpusRow, DictionaryEntry};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use tracing::info;

/// Translation direction between the two sides of the lexicon
///
/// The wire names (`en_to_ig`, `ig_to_en`) are part of the external API
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// English → Igala
    #[serde(rename = "en_to_ig")]
    Forward,
    /// Igala → English
    #[serde(rename = "ig_to_en")]
    Reverse,
}

impl Direction {
    /// The opposite direction, used for the back-translation step
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// The language on the source side of this direction
    pub fn source_language(self) -> Language {
        match self {
            Direction::Forward => Language::English,
            Direction::Reverse => Language::Igala,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "en_to_ig"),
            Direction::Reverse => write!(f, "ig_to_en"),
        }
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en_to_ig" | "forward" => Ok(Direction::Forward),
            "ig_to_en" | "reverse" => Ok(Direction::Reverse),
            other => Err(EngineError::InvalidArgument(format!(
                "unknown direction '{}' (expected 'en_to_ig' or 'ig_to_en')",
                other
            ))),
        }
    }
}

/// One of the two languages of the lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Igala,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "english"),
            Language::Igala => write!(f, "igala"),
        }
    }
}

impl FromStr for Language {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "english" | "en" => Ok(Language::English),
            "igala" | "ig" => Ok(Language::Igala),
            other => Err(EngineError::InvalidArgument(format!(
                "unknown language '{}' (expected 'english' or 'igala')",
                other
            ))),
        }
    }
}

/// Immutable pair of direction-specific lookup mappings
///
/// Built once from a normalized entry sequence; every other engine operation
/// is a pure read against it. An empty corpus produces an empty lexicon and
/// all downstream operations degrade to zero-confidence / no-match results
/// rather than failing.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    forward: HashMap<String, String>,
    inverse: HashMap<String, String>,
}

impl Lexicon {
    /// Build a lexicon from an ordered sequence of normalized entries
    ///
    /// Exact duplicate pairs are discarded. The forward mapping keeps the
    /// last-seen Igala value for each English key. The inverse mapping is
    /// derived from the deduplicated forward mapping, iterated in
    /// first-insertion key order, again last-seen-wins: when two English
    /// words share one Igala word, only one of them survives on the inverse
    /// side. This many-to-one collapse is a known lossy property of the
    /// one-value-per-key data model and callers must not rely on reverse
    /// lookups being total.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut forward: HashMap<String, String> = HashMap::new();
        // First-insertion order of forward keys, so the inverse derivation
        // below is deterministic.
        let mut key_order: Vec<String> = Vec::new();

        for entry in entries {
            let pair = (entry.english.clone(), entry.igala.clone());
            if !seen.insert(pair) {
                continue;
            }
            if !forward.contains_key(&entry.english) {
                key_order.push(entry.english.clone());
            }
            forward.insert(entry.english, entry.igala);
        }

        let mut inverse: HashMap<String, String> = HashMap::new();
        for key in &key_order {
            if let Some(value) = forward.get(key) {
                inverse.insert(value.clone(), key.clone());
            }
        }

        info!(
            forward_entries = forward.len(),
            inverse_entries = inverse.len(),
            "lexicon built"
        );

        Lexicon { forward, inverse }
    }

    /// Build a lexicon from raw corpus rows, normalizing each row first
    ///
    /// Rows with an empty side after normalization are dropped. Only the two
    /// translation columns are consumed; any part-of-speech tag on the row
    /// is ignored here.
    pub fn from_rows(rows: &[CorpusRow]) -> Self {
        Self::from_entries(
            rows.iter()
                .filter_map(|row| DictionaryEntry::normalize(&row.english, &row.igala)),
        )
    }

    /// Convenience constructor from raw `(english, igala)` string pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::from_entries(
            pairs
                .iter()
                .filter_map(|(en, ig)| DictionaryEntry::normalize(en, ig)),
        )
    }

    /// Look up a single token in the mapping for `direction`
    ///
    /// Returns `None` on a miss; the pass-through-on-miss policy lives in
    /// the translator, not here.
    pub fn lookup(&self, direction: Direction, token: &str) -> Option<&str> {
        self.mapping(direction).get(token).map(String::as_str)
    }

    /// Whether `token` is a key of the mapping for `direction`
    pub fn contains(&self, direction: Direction, token: &str) -> bool {
        self.mapping(direction).contains_key(token)
    }

    /// Iterate the vocabulary of one language side
    pub fn vocabulary(&self, language: Language) -> impl Iterator<Item = &str> {
        let mapping = match language {
            Language::English => &self.forward,
            Language::Igala => &self.inverse,
        };
        mapping.keys().map(String::as_str)
    }

    /// Number of entries in the forward (English → Igala) mapping
    pub fn forward_len(&self) -> usize {
        self.forward.len()
    }

    /// Number of entries in the inverse (Igala → English) mapping
    pub fn inverse_len(&self) -> usize {
        self.inverse.len()
    }

    /// True when the lexicon holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.inverse.is_empty()
    }

    fn mapping(&self, direction: Direction) -> &HashMap<String, String> {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.inverse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Construction Tests ==========

    #[test]
    fn test_from_pairs_basic() {
        let lexicon = Lexicon::from_pairs(&[("hello", "sannu"), ("world", "aiye")]);
        assert_eq!(lexicon.forward_len(), 2);
        assert_eq!(lexicon.inverse_len(), 2);
        assert_eq!(lexicon.lookup(Direction::Forward, "hello"), Some("sannu"));
        assert_eq!(lexicon.lookup(Direction::Reverse, "sannu"), Some("hello"));
    }

    #[test]
    fn test_empty_corpus_gives_empty_lexicon() {
        let lexicon = Lexicon::from_pairs(&[]);
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.lookup(Direction::Forward, "anything"), None);
    }

    #[test]
    fn test_english_side_lower_cased_igala_side_kept() {
        let lexicon = Lexicon::from_pairs(&[("  Stone ", " òkwúta ")]);
        assert_eq!(lexicon.lookup(Direction::Forward, "stone"), Some("òkwúta"));
        // Igala side keeps its casing and diacritics
        assert_eq!(lexicon.lookup(Direction::Reverse, "òkwúta"), Some("stone"));
        assert_eq!(lexicon.lookup(Direction::Forward, "Stone"), None);
    }

    #[test]
    fn test_empty_sides_dropped() {
        let lexicon = Lexicon::from_pairs(&[("hello", "   "), ("", "sannu"), ("world", "aiye")]);
        assert_eq!(lexicon.forward_len(), 1);
        assert_eq!(lexicon.lookup(Direction::Forward, "world"), Some("aiye"));
    }

    #[test]
    fn test_exact_duplicate_pairs_discarded() {
        let lexicon = Lexicon::from_pairs(&[("hello", "sannu"), ("Hello", "sannu")]);
        assert_eq!(lexicon.forward_len(), 1);
        assert_eq!(lexicon.inverse_len(), 1);
    }

    // ========== Collision Tests ==========

    #[test]
    fn test_forward_collision_last_seen_wins() {
        let lexicon = Lexicon::from_pairs(&[("hello", "sannu"), ("hello", "kabo")]);
        assert_eq!(lexicon.forward_len(), 1);
        assert_eq!(lexicon.lookup(Direction::Forward, "hello"), Some("kabo"));
    }

    #[test]
    fn test_inverse_collision_collapses_to_last_key() {
        // Two English words sharing one Igala word: the inverse side keeps
        // only the later-inserted English key.
        let lexicon = Lexicon::from_pairs(&[("big", "nla"), ("large", "nla")]);
        assert_eq!(lexicon.forward_len(), 2);
        assert_eq!(lexicon.inverse_len(), 1);
        assert_eq!(lexicon.lookup(Direction::Reverse, "nla"), Some("large"));
        // Both forward entries still translate
        assert_eq!(lexicon.lookup(Direction::Forward, "big"), Some("nla"));
        assert_eq!(lexicon.lookup(Direction::Forward, "large"), Some("nla"));
    }

    // ========== Direction / Language Tests ==========

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Forward.opposite(), Direction::Reverse);
        assert_eq!(Direction::Reverse.opposite(), Direction::Forward);
    }

    #[test]
    fn test_direction_parse_and_display() {
        assert_eq!("en_to_ig".parse::<Direction>().unwrap(), Direction::Forward);
        assert_eq!("ig_to_en".parse::<Direction>().unwrap(), Direction::Reverse);
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!(Direction::Forward.to_string(), "en_to_ig");
    }

    #[test]
    fn test_direction_serde_wire_names() {
        let json = serde_json::to_string(&Direction::Forward).unwrap();
        assert_eq!(json, "\"en_to_ig\"");
        let parsed: Direction = serde_json::from_str("\"ig_to_en\"").unwrap();
        assert_eq!(parsed, Direction::Reverse);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("igala".parse::<Language>().unwrap(), Language::Igala);
        assert!("latin".parse::<Language>().is_err());
    }

    #[test]
    fn test_vocabulary_sides() {
        let lexicon = Lexicon::from_pairs(&[("hello", "sannu"), ("world", "aiye")]);
        let mut english: Vec<&str> = lexicon.vocabulary(Language::English).collect();
        english.sort_unstable();
        assert_eq!(english, vec!["hello", "world"]);
        let mut igala: Vec<&str> = lexicon.vocabulary(Language::Igala).collect();
        igala.sort_unstable();
        assert_eq!(igala, vec!["aiye", "sannu"]);
    }
}
