//! End-to-end tests for the translation engine
//!
//! These tests exercise the full path the binaries take: parse a CSV
//! corpus, build the lexicon, then drive translation, detection,
//! suggestions, and quality assessment against it together.

#[cfg(test)]
mod tests {
    use crate::batch::{batch_back_translate, translate_batch};
    use crate::detect::{DetectedLanguage, detect_language};
    use crate::lexicon::{Direction, Language, Lexicon};
    use crate::quality::{QualityLevel, back_translate};
    use crate::suggest::suggest_words;
    use crate::translator::translate_single;
    use crate::{corpus, parse_corpus};

    const CORPUS: &str = "\
English,Igala,POS
hello,sannu,UH
world,aiye,NN
stone,òkwúta,NN
house,únyí,NN
table,ítébùlù,NN
eat,jẹ,VB
black,édúdú,JJ
";

    fn lexicon() -> Lexicon {
        let rows = parse_corpus(CORPUS).unwrap();
        Lexicon::from_rows(&rows)
    }

    // ========== Corpus → Lexicon ==========

    #[test]
    fn test_corpus_builds_complete_lexicon() {
        let lexicon = lexicon();
        assert_eq!(lexicon.forward_len(), 7);
        assert_eq!(lexicon.inverse_len(), 7);
        assert_eq!(lexicon.lookup(Direction::Forward, "stone"), Some("òkwúta"));
        assert_eq!(lexicon.lookup(Direction::Reverse, "jẹ"), Some("eat"));
    }

    #[test]
    fn test_pos_tags_survive_on_rows_but_not_in_lexicon() {
        let rows = parse_corpus(CORPUS).unwrap();
        assert!(rows.iter().all(|r| r.pos.is_some()));
        // the lexicon consumes only the two translation columns
        let lexicon = Lexicon::from_rows(&rows);
        assert_eq!(lexicon.lookup(Direction::Forward, "nn"), None);
    }

    // ========== Round Trips Through the Whole Stack ==========

    #[test]
    fn test_translate_detect_assess_pipeline() {
        let lexicon = lexicon();

        let forward = translate_single(&lexicon, "hello world", Direction::Forward);
        assert_eq!(forward.translated, "sannu aiye");

        assert_eq!(
            detect_language(&lexicon, &forward.original),
            DetectedLanguage::English
        );
        assert_eq!(
            detect_language(&lexicon, &forward.translated),
            DetectedLanguage::Igala
        );

        let assessment = back_translate(&lexicon, "hello world", Direction::Forward);
        assert_eq!(assessment.back_translation, "hello world");
        assert_eq!(assessment.overall_quality.quality_level, QualityLevel::Excellent);
    }

    #[test]
    fn test_mixed_coverage_degrades_gracefully() {
        let lexicon = lexicon();
        let assessment = back_translate(&lexicon, "hello beautiful world", Direction::Forward);
        // "beautiful" leaks through both legs verbatim
        assert_eq!(assessment.forward_translation, "sannu beautiful aiye");
        assert_eq!(assessment.back_translation, "hello beautiful world");
        assert_eq!(assessment.forward_confidence, 66.67);
        assert_eq!(assessment.quality_metrics.similarity_score, 100.0);
    }

    #[test]
    fn test_suggestions_over_loaded_vocabulary() {
        let lexicon = lexicon();
        let english = suggest_words(&lexicon, "h", Language::English, 5);
        assert_eq!(english.suggestions, vec!["hello", "house"]);
        let igala = suggest_words(&lexicon, "ò", Language::Igala, 5);
        assert_eq!(igala.suggestions, vec!["òkwúta"]);
    }

    #[test]
    fn test_batch_summaries_agree_with_single_calls() {
        let lexicon = lexicon();
        let texts = vec!["hello world".to_string(), "eat stone".to_string()];

        let batch = translate_batch(&lexicon, &texts, Direction::Forward);
        for (text, result) in texts.iter().zip(&batch.results) {
            let single = translate_single(&lexicon, text, Direction::Forward);
            assert_eq!(single.translated, result.translated);
            assert_eq!(single.confidence, result.confidence);
        }

        let qa = batch_back_translate(&lexicon, &texts, Direction::Forward);
        assert_eq!(qa.total_texts, 2);
        let counted: usize = qa.quality_distribution.values().sum();
        assert_eq!(counted, 2);
    }

    // ========== Serialization Contract ==========

    #[test]
    fn test_back_translation_result_wire_shape() {
        let lexicon = lexicon();
        let result = back_translate(&lexicon, "hello world", Direction::Forward);
        let json = serde_json::to_value(&result).unwrap();

        for field in [
            "original_text",
            "forward_translation",
            "back_translation",
            "forward_confidence",
            "back_confidence",
            "quality_metrics",
            "overall_quality",
            "source_direction",
            "timestamp",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["source_direction"], "en_to_ig");
        assert_eq!(json["overall_quality"]["quality_level"], "Excellent");
        assert_eq!(
            json["overall_quality"]["quality_description"],
            "High-quality translation with good preservation of meaning"
        );
    }

    // ========== Degenerate Corpus ==========

    #[test]
    fn test_empty_corpus_degrades_to_zero_everywhere() {
        let lexicon = Lexicon::from_rows(&corpus::parse_corpus("").unwrap());
        assert!(lexicon.is_empty());

        let result = translate_single(&lexicon, "hello world", Direction::Forward);
        assert_eq!(result.translated, "hello world");
        assert_eq!(result.confidence, 0.0);

        assert_eq!(
            detect_language(&lexicon, "hello world"),
            DetectedLanguage::Unknown
        );
        assert!(
            suggest_words(&lexicon, "he", Language::English, 5)
                .suggestions
                .is_empty()
        );
    }
}
