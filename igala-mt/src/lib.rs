//! # igala-mt
//!
//! Word-level English↔Igala translation over a fixed parallel word list,
//! with a built-in self-assessment mechanism (back-translation) that
//! estimates translation quality without a human reviewer.
//!
//! # Overview
//!
//! The engine is built from small, composable pieces:
//!
//! 1. **Corpus** - loads the parallel CSV word list and normalizes entries
//! 2. **Lexicon** - immutable forward/inverse lookup mappings, built once
//! 3. **Translator** - per-token substitution with coverage confidence
//! 4. **Detector** - guesses the input language from dictionary-hit counts
//! 5. **Suggestions** - prefix autocomplete over either vocabulary side
//! 6. **Quality** - forward + back translation round trip with a verdict
//! 7. **Batch** - order-preserving batch variants with aggregate statistics
//!
//! The lexicon is constructed explicitly at startup and passed to every
//! operation; there is no hidden global state. Once built it is read-only,
//! so it can be shared across threads behind an `Arc` without locking.
//!
//! # Example
//!
//! ```
//! use igala_mt::{Direction, Lexicon, back_translate, translate_single};
//!
//! let lexicon = Lexicon::from_pairs(&[("hello", "sannu"), ("world", "aiye")]);
//!
//! let result = translate_single(&lexicon, "Hello World", Direction::Forward);
//! assert_eq!(result.translated, "sannu aiye");
//! assert_eq!(result.confidence, 100.0);
//!
//! let assessment = back_translate(&lexicon, "hello world", Direction::Forward);
//! assert_eq!(assessment.overall_quality.overall_score, 100.0);
//! ```

pub mod batch;
pub mod corpus;
pub mod detect;
pub mod error;
pub mod lexicon;
pub mod quality;
pub mod suggest;
pub mod translator;

#[cfg(test)]
mod integration_tests;

pub use batch::{BatchBackTranslationSummary, BatchTranslationSummary, batch_back_translate, translate_batch};
pub use corpus::{CorpusRow, DictionaryEntry, load_corpus_from_file, parse_corpus};
pub use detect::{DetectedLanguage, DetectionResult, detect, detect_language};
pub use error::{EngineError, EngineResult};
pub use lexicon::{Direction, Language, Lexicon};
pub use quality::{
    BackTranslationResult, OverallQuality, QualityLevel, QualityMetrics, assess_quality,
    back_translate, score_back_translation,
};
pub use suggest::{SuggestionResult, suggest_words};
pub use translator::{TranslationResult, translate_single};
