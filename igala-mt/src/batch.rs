//! Batch translation and batch quality assessment
//!
//! Thin order-preserving maps over the single-item operations, plus the
//! aggregate statistics the outbound API reports. Each item touches only
//! the shared immutable lexicon, so results are independent; an empty input
//! sequence is not an error and aggregates to zero.

use crate::lexicon::{Direction, Lexicon};
use crate::quality::{BackTranslationResult, QualityLevel, back_translate};
use crate::translator::{TranslationResult, round2, translate_single};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Results and aggregate confidence for one translation batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchTranslationSummary {
    pub results: Vec<TranslationResult>,
    pub total_translations: usize,
    /// Arithmetic mean of per-item confidence; 0 for an empty batch
    pub average_confidence: f64,
}

/// Results and aggregate statistics for one back-translation batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchBackTranslationSummary {
    pub results: Vec<BackTranslationResult>,
    pub total_texts: usize,
    /// Mean overall quality score, rounded to two decimals; 0 for an empty
    /// batch
    pub average_quality_score: f64,
    /// Count of results per quality level; every level is present even when
    /// its count is zero
    pub quality_distribution: BTreeMap<QualityLevel, usize>,
}

/// Translate every text in order and aggregate the mean confidence
pub fn translate_batch(
    lexicon: &Lexicon,
    texts: &[String],
    direction: Direction,
) -> BatchTranslationSummary {
    let results: Vec<TranslationResult> = texts
        .iter()
        .map(|text| translate_single(lexicon, text, direction))
        .collect();

    let average_confidence = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.confidence).sum::<f64>() / results.len() as f64
    };

    BatchTranslationSummary {
        total_translations: results.len(),
        average_confidence,
        results,
    }
}

/// Assess every text in order and aggregate score mean and level
/// distribution
pub fn batch_back_translate(
    lexicon: &Lexicon,
    texts: &[String],
    source_direction: Direction,
) -> BatchBackTranslationSummary {
    let results: Vec<BackTranslationResult> = texts
        .iter()
        .map(|text| back_translate(lexicon, text, source_direction))
        .collect();

    let average_quality_score = if results.is_empty() {
        0.0
    } else {
        round2(
            results
                .iter()
                .map(|r| r.overall_quality.overall_score)
                .sum::<f64>()
                / results.len() as f64,
        )
    };

    let mut quality_distribution: BTreeMap<QualityLevel, usize> =
        QualityLevel::ALL.iter().map(|&level| (level, 0)).collect();
    for result in &results {
        if let Some(count) = quality_distribution.get_mut(&result.overall_quality.quality_level) {
            *count += 1;
        }
    }

    BatchBackTranslationSummary {
        total_texts: results.len(),
        average_quality_score,
        quality_distribution,
        results,
    }
}
