//! Back-translation quality assessment
//!
//! Translation quality is estimated without a reference translation by
//! round-tripping the input: translate forward, translate the result back,
//! then compare the back-translation against the original. Three signals
//! feed the verdict: forward dictionary coverage, backward dictionary
//! coverage, and the word-type overlap between original and back-translated
//! text. The weighted combination and its thresholds are part of the
//! external API contract and must not drift.

use crate::lexicon::{Direction, Lexicon};
use crate::translator::{round2, translate_single};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

const REC_FORWARD_LOW: &str =
    "Consider reviewing the forward translation - low dictionary coverage";
const REC_BACK_LOW: &str =
    "Back translation has low confidence - may indicate translation issues";
const REC_SIMILARITY_LOW: &str =
    "Low similarity between original and back-translated text - meaning may be lost";
const REC_OVERALL_LOW: &str =
    "Overall quality is below acceptable threshold - manual review recommended";
const REC_NO_CONCERNS: &str = "Translation quality is good - no immediate concerns";

/// Word-overlap metrics between an original text and its back-translation
///
/// `similarity_score` and `preservation_rate` are numerically identical by
/// construction; both are kept for interface compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub similarity_score: f64,
    pub word_overlap: usize,
    pub total_original_words: usize,
    pub preservation_rate: f64,
    pub overlapping_words: BTreeSet<String>,
}

impl QualityMetrics {
    fn zero() -> Self {
        QualityMetrics {
            similarity_score: 0.0,
            word_overlap: 0,
            total_original_words: 0,
            preservation_rate: 0.0,
            overlapping_words: BTreeSet::new(),
        }
    }
}

/// Thresholded bucket of the overall weighted quality score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityLevel {
    /// All levels, in ranking order; used to zero-initialize distributions
    pub const ALL: [QualityLevel; 4] = [
        QualityLevel::Excellent,
        QualityLevel::Good,
        QualityLevel::Fair,
        QualityLevel::Poor,
    ];

    /// Bucket an overall score; lower bounds are inclusive
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            QualityLevel::Excellent
        } else if score >= 60.0 {
            QualityLevel::Good
        } else if score >= 40.0 {
            QualityLevel::Fair
        } else {
            QualityLevel::Poor
        }
    }

    /// Fixed description string for this level, part of the API contract
    pub fn description(self) -> &'static str {
        match self {
            QualityLevel::Excellent => {
                "High-quality translation with good preservation of meaning"
            }
            QualityLevel::Good => "Acceptable translation with minor meaning loss",
            QualityLevel::Fair => "Translation may have some meaning distortion",
            QualityLevel::Poor => "Translation quality is low, manual review recommended",
        }
    }
}

impl std::fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityLevel::Excellent => write!(f, "Excellent"),
            QualityLevel::Good => write!(f, "Good"),
            QualityLevel::Fair => write!(f, "Fair"),
            QualityLevel::Poor => write!(f, "Poor"),
        }
    }
}

/// Categorized verdict over one back-translation round trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallQuality {
    pub overall_score: f64,
    pub quality_level: QualityLevel,
    pub quality_description: String,
    pub recommendations: Vec<String>,
}

/// Full result of a back-translation quality assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackTranslationResult {
    pub original_text: String,
    pub forward_translation: String,
    pub back_translation: String,
    pub forward_confidence: f64,
    pub back_confidence: f64,
    pub quality_metrics: QualityMetrics,
    pub overall_quality: OverallQuality,
    pub source_direction: Direction,
    pub timestamp: DateTime<Utc>,
}

/// Compare an original text against its back-translation by word-type
/// overlap
///
/// Both strings are lower-cased and whitespace-split into sets, so
/// duplicates collapse and order is ignored. An empty original yields
/// all-zero metrics through the explicit branch rather than a division by
/// zero.
pub fn score_back_translation(original: &str, back_translated: &str) -> QualityMetrics {
    let original_words: BTreeSet<String> = original
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if original_words.is_empty() {
        return QualityMetrics::zero();
    }

    let back_words: BTreeSet<String> = back_translated
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let overlapping_words: BTreeSet<String> =
        original_words.intersection(&back_words).cloned().collect();
    let rate = round2(overlapping_words.len() as f64 / original_words.len() as f64 * 100.0);

    QualityMetrics {
        similarity_score: rate,
        word_overlap: overlapping_words.len(),
        total_original_words: original_words.len(),
        preservation_rate: rate,
        overlapping_words,
    }
}

/// Combine the three quality signals into an overall verdict
///
/// The weights (0.4 forward confidence, 0.3 back confidence, 0.3
/// similarity) and the 80/60/40 level thresholds are fixed by the external
/// contract. The four recommendation rules are evaluated independently in
/// fixed order; when none triggers, the single "no immediate concerns"
/// message is emitted instead.
pub fn assess_quality(
    forward_confidence: f64,
    back_confidence: f64,
    similarity_score: f64,
) -> OverallQuality {
    let overall_score =
        round2(0.4 * forward_confidence + 0.3 * back_confidence + 0.3 * similarity_score);
    let quality_level = QualityLevel::from_score(overall_score);

    let mut recommendations = Vec::new();
    if forward_confidence < 70.0 {
        recommendations.push(REC_FORWARD_LOW.to_string());
    }
    if back_confidence < 70.0 {
        recommendations.push(REC_BACK_LOW.to_string());
    }
    if similarity_score < 50.0 {
        recommendations.push(REC_SIMILARITY_LOW.to_string());
    }
    if overall_score < 60.0 {
        recommendations.push(REC_OVERALL_LOW.to_string());
    }
    if recommendations.is_empty() {
        recommendations.push(REC_NO_CONCERNS.to_string());
    }

    OverallQuality {
        overall_score,
        quality_level,
        quality_description: quality_level.description().to_string(),
        recommendations,
    }
}

/// Run the full round-trip assessment pipeline on one text
///
/// Forward translation, back translation in the opposite direction, overlap
/// metrics, then the overall verdict. Empty input short-circuits the whole
/// pipeline into the degenerate result: empty translations, zero
/// confidences and metrics, and a zero-score verdict that carries only the
/// default recommendation, since nothing was translated for the
/// concern-driven rules to speak about.
pub fn back_translate(
    lexicon: &Lexicon,
    text: &str,
    source_direction: Direction,
) -> BackTranslationResult {
    if text.trim().is_empty() {
        let quality_level = QualityLevel::from_score(0.0);
        return BackTranslationResult {
            original_text: text.to_string(),
            forward_translation: String::new(),
            back_translation: String::new(),
            forward_confidence: 0.0,
            back_confidence: 0.0,
            quality_metrics: QualityMetrics::zero(),
            overall_quality: OverallQuality {
                overall_score: 0.0,
                quality_level,
                quality_description: quality_level.description().to_string(),
                recommendations: vec![REC_NO_CONCERNS.to_string()],
            },
            source_direction,
            timestamp: Utc::now(),
        };
    }

    let forward = translate_single(lexicon, text, source_direction);
    let back = translate_single(lexicon, &forward.translated, source_direction.opposite());
    let quality_metrics = score_back_translation(text, &back.translated);
    let overall_quality = assess_quality(
        forward.confidence,
        back.confidence,
        quality_metrics.similarity_score,
    );

    debug!(
        %source_direction,
        overall = overall_quality.overall_score,
        level = %overall_quality.quality_level,
        "back-translation assessed"
    );

    BackTranslationResult {
        original_text: text.to_string(),
        forward_translation: forward.translated,
        back_translation: back.translated,
        forward_confidence: forward.confidence,
        back_confidence: back.confidence,
        quality_metrics,
        overall_quality,
        source_direction,
        timestamp: Utc::now(),
    }
}
