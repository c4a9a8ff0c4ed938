//! Parallel corpus loading and entry normalization
//!
//! The corpus is a CSV word list with an `English` column, an `Igala`
//! column, and an optional `POS` column written by an external
//! part-of-speech tagger. Only the two translation columns feed the
//! lexicon; the POS tag is carried through on the raw row for callers
//! that want it.

use crate::error::{EngineError, EngineResult};
use std::fs;
use std::path::Path;
use tracing::warn;

/// One raw row of the parallel corpus, as read from the CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRow {
    pub english: String,
    pub igala: String,
    /// Part-of-speech tag from the external tagger, when present
    pub pos: Option<String>,
}

/// A normalized translation pair
///
/// Normalization trims whitespace on both sides and lower-cases the English
/// side only; Igala keeps its original casing and diacritics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryEntry {
    pub english: String,
    pub igala: String,
}

impl DictionaryEntry {
    /// Normalize a raw pair, returning `None` when either side is empty
    /// after trimming
    pub fn normalize(english: &str, igala: &str) -> Option<Self> {
        let english = english.trim().to_lowercase();
        let igala = igala.trim().to_string();
        if english.is_empty() || igala.is_empty() {
            return None;
        }
        Some(DictionaryEntry { english, igala })
    }
}

/// Parse CSV corpus content into raw rows
///
/// A header row is recognized when its fields contain `English`
/// (case-insensitive); column positions are then resolved by name, so the
/// corpus may carry extra columns in any order. Without a header the first
/// column is English, the second Igala, the third (if any) POS. Rows
/// missing a translation column are skipped with a warning rather than
/// failing the whole load.
///
/// # Errors
/// - `CorpusParse` when a header row is present but lacks an `Igala` column
pub fn parse_corpus(content: &str) -> EngineResult<Vec<CorpusRow>> {
    let mut lines = content.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let (mut english_col, mut igala_col, mut pos_col) = (0usize, 1usize, Some(2usize));

    let first = lines.next();
    let mut rows = Vec::new();

    if let Some((number, line)) = first {
        let fields = split_csv_line(line);
        let header = fields
            .iter()
            .position(|f| f.trim().eq_ignore_ascii_case("english"));
        if let Some(col) = header {
            english_col = col;
            igala_col = fields
                .iter()
                .position(|f| f.trim().eq_ignore_ascii_case("igala"))
                .ok_or_else(|| {
                    EngineError::CorpusParse("header row has no 'Igala' column".to_string())
                })?;
            pos_col = fields
                .iter()
                .position(|f| f.trim().eq_ignore_ascii_case("pos"));
        } else if let Some(row) = row_from_fields(&fields, english_col, igala_col, pos_col) {
            rows.push(row);
        } else {
            warn!(line = number + 1, "skipping corpus row with missing column");
        }
    }

    for (number, line) in lines {
        let fields = split_csv_line(line);
        match row_from_fields(&fields, english_col, igala_col, pos_col) {
            Some(row) => rows.push(row),
            None => warn!(line = number + 1, "skipping corpus row with missing column"),
        }
    }

    Ok(rows)
}

/// Load corpus rows from a CSV file on disk
///
/// # Errors
/// - `CorpusIo` when the file cannot be read
/// - `CorpusParse` as for [`parse_corpus`]
pub fn load_corpus_from_file(path: &Path) -> EngineResult<Vec<CorpusRow>> {
    let content = fs::read_to_string(path).map_err(|e| {
        EngineError::CorpusIo(format!("failed to read '{}': {}", path.display(), e))
    })?;
    parse_corpus(&content)
}

fn row_from_fields(
    fields: &[String],
    english_col: usize,
    igala_col: usize,
    pos_col: Option<usize>,
) -> Option<CorpusRow> {
    let english = fields.get(english_col)?.clone();
    let igala = fields.get(igala_col)?.clone();
    let pos = pos_col
        .and_then(|col| fields.get(col))
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty());
    Some(CorpusRow { english, igala, pos })
}

/// Split a CSV line into fields, honoring double-quoted fields with
/// embedded commas and doubled-quote escapes
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}
