//! Shared text primitives: diacritic folding, whole-word matching, and the
//! regexes used by more than one extractor.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub(crate) static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap());

/// 4-digit year in the range the segmenter cares about (1900–2099).
pub(crate) static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

/// Lowercases and strips diacritics: "Expérience Professionnelle" →
/// "experience professionnelle". Ligatures œ/æ expand so French vocab
/// matches hold.
pub(crate) fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'œ' | 'Œ' => out.push_str("oe"),
            'æ' | 'Æ' => out.push_str("ae"),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Whole-word containment on already-folded text. `word` may span several
/// tokens ("chef de projet") or end in symbols ("c++"); boundaries are
/// non-alphanumeric characters or the string edges.
pub(crate) fn contains_word(folded_line: &str, word: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = folded_line[from..].find(word) {
        let start = from + pos;
        let end = start + word.len();
        let left_ok = start == 0
            || !folded_line[..start]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let right_ok = end == folded_line.len()
            || !folded_line[end..].chars().next().is_some_and(char::is_alphanumeric);
        if left_ok && right_ok {
            return true;
        }
        from = start + word.len().max(1);
    }
    false
}

/// True if the line contains a 4-digit year between 1900 and 2099.
pub(crate) fn has_year(line: &str) -> bool {
    YEAR_RE.is_match(line)
}

/// "new york" → "New York". Used when a vocabulary entry has to be shown
/// and no original casing is available.
pub(crate) fn title_case_words(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_accents_and_case() {
        assert_eq!(fold("Expérience Professionnelle"), "experience professionnelle");
        assert_eq!(fold("Diplômé"), "diplome");
        assert_eq!(fold("Cœur"), "coeur");
    }

    #[test]
    fn test_contains_word_boundaries() {
        assert!(contains_word("senior rust engineer", "rust"));
        assert!(!contains_word("brushed metal", "rust"));
        assert!(contains_word("c++ et java", "c++"));
        assert!(contains_word("chef de projet digital", "chef de projet"));
        assert!(!contains_word("projet", "r"));
    }

    #[test]
    fn test_has_year_range() {
        assert!(has_year("2019 - 2022"));
        assert!(has_year("depuis 1998"));
        assert!(!has_year("salle 1830b"));
        assert!(!has_year("3019"));
    }
}
