//! Date-range heuristics shared by the experience and education extractors.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::{contains_word, fold, YEAR_RE};
use crate::vocab::{CURRENT_KEYWORDS, MONTH_PREFIXES};

/// Sentinel end date for a position still held.
pub const PRESENT: &str = "Present";

/// "jan 21", "févr. 2021", "aout 99" — month word plus a 2- or 4-digit year.
/// Matched on folded text, so the month alternatives are unaccented.
static MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    let months = MONTH_PREFIXES.join("|");
    Regex::new(&format!(r"\b(?:{months})[a-z]*\.?\s+\d{{2,4}}\b")).unwrap()
});

/// A bare month word, for scrubbing date fragments.
static MONTH_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let months = MONTH_PREFIXES.join("|");
    Regex::new(&format!(r"\b(?:{months})[a-z]*\.?")).unwrap()
});

/// Extracts a (start, end) date pair from an entry block.
///
/// The first two lines are searched jointly: two 4-digit years win, then one
/// year plus a current-role keyword ("aujourd'hui", "present"), then a bare
/// year, then month+year token pairs.
pub fn extract_date_range(block: &[String]) -> (String, String) {
    let haystack = block
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let folded = fold(&haystack);

    let years: Vec<&str> = YEAR_RE.find_iter(&haystack).map(|m| m.as_str()).collect();
    match years.len() {
        0 => {}
        1 if has_current_keyword(&folded) => return (years[0].to_string(), PRESENT.to_string()),
        1 => return (years[0].to_string(), String::new()),
        _ => return (years[0].to_string(), years[1].to_string()),
    }

    let pairs: Vec<&str> = MONTH_YEAR_RE.find_iter(&folded).map(|m| m.as_str()).collect();
    match pairs.len() {
        0 => (String::new(), String::new()),
        1 => (pairs[0].to_string(), String::new()),
        _ => (pairs[0].to_string(), pairs[1].to_string()),
    }
}

pub(crate) fn has_current_keyword(folded: &str) -> bool {
    CURRENT_KEYWORDS.iter().any(|k| contains_word(folded, k))
}

/// True when a head-split part carries nothing but date material
/// ("2018 - 2021", "2022 - Present", "jan 2020 - dec 2021"): such parts
/// must not be read as a company, location, or highlight.
pub fn is_date_fragment(part: &str) -> bool {
    let mut folded = fold(part);
    if folded.trim().is_empty() {
        return false;
    }
    folded = MONTH_YEAR_RE.replace_all(&folded, " ").into_owned();
    folded = YEAR_RE.replace_all(&folded, " ").into_owned();
    folded = MONTH_WORD_RE.replace_all(&folded, " ").into_owned();
    for kw in CURRENT_KEYWORDS {
        folded = folded.replace(kw, " ");
    }
    folded.chars().filter(|c| c.is_alphanumeric()).count() <= 2
}
