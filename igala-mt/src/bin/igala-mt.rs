use clap::{Arg, Command};
use igala_mt::{
    Direction, Language, Lexicon, back_translate, detect_language, load_corpus_from_file,
    suggest_words, translate_single,
};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("igala-mt")
        .version("0.1.0")
        .about("Word-level English-Igala translation with quality assessment")
        .arg(
            Arg::new("text")
                .help("Text to translate (or partial word with --suggest)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("direction")
                .long("direction")
                .short('d')
                .help("Translation direction: en_to_ig or ig_to_en")
                .default_value("en_to_ig"),
        )
        .arg(
            Arg::new("corpus")
                .long("corpus")
                .short('c')
                .help("Path to the parallel corpus CSV")
                .default_value("data/corpus.csv"),
        )
        .arg(
            Arg::new("assess")
                .long("assess")
                .short('a')
                .help("Run a back-translation quality assessment instead of a plain translation")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("detect")
                .long("detect")
                .help("Detect the language of the text and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("suggest")
                .long("suggest")
                .short('s')
                .help("Treat the text as a partial word and print autocomplete suggestions")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Vocabulary side for --suggest: english or igala")
                .default_value("english"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .help("Maximum number of suggestions")
                .default_value("5"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the raw JSON result instead of formatted output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show corpus and lexicon details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").unwrap();
    let corpus_path = matches.get_one::<String>("corpus").unwrap();
    let as_json = matches.get_flag("json");
    let verbose = matches.get_flag("verbose");

    let direction: Direction = matches.get_one::<String>("direction").unwrap().parse()?;

    // 1. Load the corpus and build the lexicon once, up front
    let rows = match load_corpus_from_file(Path::new(corpus_path)) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("❌ Failed to load corpus '{}': {}", corpus_path, e);
            eprintln!("   Point --corpus at a CSV with English and Igala columns");
            return Err(e.into());
        }
    };
    let lexicon = Lexicon::from_rows(&rows);

    if verbose {
        println!("📖 Corpus: {} ({} rows)", corpus_path, rows.len());
        println!(
            "   Lexicon: {} forward / {} inverse entries",
            lexicon.forward_len(),
            lexicon.inverse_len()
        );
        println!();
    }

    // 2. Dispatch on the requested operation
    if matches.get_flag("detect") {
        let detected = detect_language(&lexicon, text);
        println!("🌍 Detected language: {}", detected);
        return Ok(());
    }

    if matches.get_flag("suggest") {
        let language: Language = matches.get_one::<String>("language").unwrap().parse()?;
        let limit: usize = matches.get_one::<String>("limit").unwrap().parse()?;
        let result = suggest_words(&lexicon, text, language, limit);
        if as_json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if result.suggestions.is_empty() {
            println!("💡 No suggestions for \"{}\"", text);
        } else {
            println!("💡 Suggestions for \"{}\":", text);
            for word in &result.suggestions {
                println!("   {}", word);
            }
        }
        return Ok(());
    }

    if matches.get_flag("assess") {
        let result = back_translate(&lexicon, text, direction);
        if as_json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }
        println!("📝 Original:  \"{}\"", result.original_text);
        println!(
            "➡️  Forward:   \"{}\" ({}% confidence)",
            result.forward_translation, result.forward_confidence
        );
        println!(
            "⬅️  Back:      \"{}\" ({}% confidence)",
            result.back_translation, result.back_confidence
        );
        println!(
            "🔁 Similarity: {}% ({} of {} words preserved)",
            result.quality_metrics.similarity_score,
            result.quality_metrics.word_overlap,
            result.quality_metrics.total_original_words
        );
        println!(
            "🏅 Quality:   {} ({}%) - {}",
            result.overall_quality.quality_level,
            result.overall_quality.overall_score,
            result.overall_quality.quality_description
        );
        for recommendation in &result.overall_quality.recommendations {
            println!("   • {}", recommendation);
        }
        return Ok(());
    }

    // 3. Plain translation
    let result = translate_single(&lexicon, text, direction);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("✅ \"{}\" → \"{}\"", result.original, result.translated);
        println!("   Confidence: {}% ({})", result.confidence, result.direction);
    }

    Ok(())
}
