//! Text Normalizer — first stage of the pipeline.
//!
//! Takes raw text produced by a document-extraction collaborator (PDF, DOCX,
//! OCR) and returns the ordered list of lines worth parsing: whitespace is
//! collapsed, extraction debris is dropped, consecutive duplicates are
//! folded. Idempotent by construction.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::text::{fold, EMAIL_RE, YEAR_RE};
use crate::vocab::{ENGINE_NAMES, NOISE_TERMS, READABLE_PUNCT};

/// A whole line of hex digits — classic binary-stream debris.
static HEX_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{10,}$").unwrap());

/// An isolated engine/library name, optionally followed by a version tail
/// ("skia", "freetype 2.10", "pdfium/5414").
static ENGINE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let names = ENGINE_NAMES.join("|");
    Regex::new(&format!(r"^(?:{names})(?:[ /\-][\w.\-]*)?$")).unwrap()
});

/// Maximum length of a line that is allowed to carry no year token.
const LONG_LINE_LEN: usize = 140;
/// Minimum alphanumeric ratio for lines longer than 5 characters.
const MIN_ALNUM_RATIO: f32 = 0.45;
/// Minimum readable-character ratio for lines of 20+ characters.
const MIN_READABLE_RATIO: f32 = 0.55;

/// Normalizes raw extracted text into cleaned lines.
///
/// Surviving lines keep their relative order. Running the result through
/// `normalize` again yields the same lines.
pub fn normalize(raw_text: &str) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();

    for raw_line in raw_text.lines() {
        let line = collapse_whitespace(raw_line);
        if line.is_empty() {
            continue;
        }
        if is_noise(&line) {
            debug!(line = %line, "dropped noise line");
            continue;
        }
        if cleaned.last().map(String::as_str) == Some(line.as_str()) {
            continue;
        }
        cleaned.push(line);
    }

    cleaned
}

fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classifies a cleaned line as extraction debris.
fn is_noise(line: &str) -> bool {
    if HEX_LINE_RE.is_match(line) {
        return true;
    }

    let folded = fold(line);
    if ENGINE_LINE_RE.is_match(&folded) {
        return true;
    }

    let noise_hits = NOISE_TERMS.iter().filter(|t| folded.contains(*t)).count();
    if noise_hits >= 2 && !EMAIL_RE.is_match(line) {
        return true;
    }

    let char_count = line.chars().count();
    if char_count > 5 {
        let alnum = line.chars().filter(|c| c.is_alphanumeric()).count();
        if (alnum as f32) / (char_count as f32) < MIN_ALNUM_RATIO {
            return true;
        }
    }

    if char_count > LONG_LINE_LEN && !YEAR_RE.is_match(line) {
        return true;
    }

    if char_count >= 20 {
        let readable = line
            .chars()
            .filter(|c| c.is_alphanumeric() || READABLE_PUNCT.contains(c))
            .count();
        if (readable as f32) / (char_count as f32) < MIN_READABLE_RATIO {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_interior_whitespace_and_trims() {
        let lines = normalize("  Jane   Doe \t Dupont  ");
        assert_eq!(lines, vec!["Jane Doe Dupont"]);
    }

    #[test]
    fn test_idempotent() {
        let raw = "Jane Doe\n\n\nSoftware   Engineer\nSoftware Engineer\nd41d8cd98f00b204\n";
        let once = normalize(raw);
        let twice = normalize(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_hex_line_always_dropped() {
        assert!(normalize("d41d8cd98f00b204e980").is_empty());
        assert!(normalize("DEADBEEF01").is_empty());
        // 9 hex digits is below the threshold
        assert_eq!(normalize("deadbeef0"), vec!["deadbeef0"]);
    }

    #[test]
    fn test_noise_vocabulary_needs_two_hits() {
        assert!(normalize("TrueType font descriptor").is_empty());
        // One hit alone survives
        assert_eq!(normalize("Typographie et font design"), vec!["Typographie et font design"]);
    }

    #[test]
    fn test_noise_vocabulary_spared_by_email() {
        let line = "font.encoding@example.com";
        assert_eq!(normalize(line), vec![line]);
    }

    #[test]
    fn test_engine_token_lines_dropped() {
        assert!(normalize("Skia").is_empty());
        assert!(normalize("freetype 2.10.4").is_empty());
        assert!(normalize("pdfium/5414").is_empty());
        assert_eq!(normalize("Skia est un projet"), vec!["Skia est un projet"]);
    }

    #[test]
    fn test_low_alnum_ratio_dropped() {
        assert!(normalize("%%%% ---- ////").is_empty());
        assert_eq!(normalize("a+b=c"), vec!["a+b=c"]); // 5 chars, under the length gate
    }

    #[test]
    fn test_long_line_without_year_dropped() {
        let long = "lorem ipsum ".repeat(13); // 156 chars
        assert!(normalize(&long).is_empty());
        let with_year = format!("{long} 2019");
        assert_eq!(normalize(&with_year).len(), 1);
    }

    #[test]
    fn test_unreadable_line_dropped() {
        let line = "a]{[<>^^~~}]{[<>^^~~}]{[";
        assert!(normalize(line).is_empty());
    }

    #[test]
    fn test_consecutive_duplicates_collapse() {
        let lines = normalize("Paris\nParis\nLyon\nParis");
        assert_eq!(lines, vec!["Paris", "Lyon", "Paris"]);
    }

    #[test]
    fn test_blank_lines_dropped_and_order_kept() {
        let lines = normalize("one\n\n\ntwo\n\nthree");
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n \t \n").is_empty());
    }
}
