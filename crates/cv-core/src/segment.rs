//! Entry Segmenter — groups a section's lines into one block per job or
//! degree.
//!
//! Résumés carry no reliable delimiter between entries once layout is gone;
//! year tokens and role/degree vocabulary are the only boundary signals that
//! survive text extraction. When header-based bucketing found nothing at
//! all, a fallback pass scans the whole document for anchor lines instead.

use crate::config::Tuning;
use crate::text::{contains_word, fold, has_year};
use crate::vocab::{DEGREE_HINTS, SCHOOL_KEYWORDS, TITLE_HINTS};

/// One logical entry: the lines describing a single job or degree.
/// Never empty; the first line is the head used for title/company splitting.
pub type EntryBlock = Vec<String>;

/// Splits a section bucket into entry blocks.
pub fn segment(lines: &[String], tuning: &Tuning) -> Vec<EntryBlock> {
    let mut blocks: Vec<EntryBlock> = Vec::new();
    let mut current: EntryBlock = Vec::new();

    for line in lines {
        let starts_new = (has_year(line) && current.len() >= tuning.year_break_min_lines)
            || (has_title_hint(line) && current.len() >= tuning.hint_break_min_lines)
            || (has_degree_hint(line) && current.len() >= tuning.hint_break_min_lines);

        if starts_new {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(line.clone());
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

pub(crate) fn has_title_hint(line: &str) -> bool {
    let folded = fold(line);
    TITLE_HINTS.iter().any(|h| contains_word(&folded, h))
}

pub(crate) fn has_degree_hint(line: &str) -> bool {
    let folded = fold(line);
    DEGREE_HINTS.iter().any(|h| contains_word(&folded, h))
}

fn has_school_keyword(line: &str) -> bool {
    let folded = fold(line);
    SCHOOL_KEYWORDS.iter().any(|k| contains_word(&folded, k))
}

fn has_separator(line: &str) -> bool {
    line.contains(" | ") || line.contains(" - ") || line.contains(" @ ")
}

/// Anchor detector for the experience fallback: a line that plausibly opens
/// a job entry anywhere in the document.
fn is_experience_anchor(line: &str) -> bool {
    has_year(line) || (has_title_hint(line) && has_separator(line))
}

/// Anchor detector for the education fallback.
fn is_education_anchor(line: &str) -> bool {
    has_degree_hint(line) || (has_school_keyword(line) && has_year(line))
}

/// Scans the whole cleaned text for entry anchors when the section bucket
/// came back empty. Each anchor greedily takes up to
/// `tuning.fallback_trail_lines` following lines (stopping at the next
/// anchor); the result is capped at `tuning.fallback_max_blocks`.
pub fn fallback_blocks(
    all_lines: &[String],
    tuning: &Tuning,
    is_anchor: fn(&str) -> bool,
) -> Vec<EntryBlock> {
    let mut blocks: Vec<EntryBlock> = Vec::new();
    let mut i = 0;

    while i < all_lines.len() && blocks.len() < tuning.fallback_max_blocks {
        if !is_anchor(&all_lines[i]) {
            i += 1;
            continue;
        }
        let mut block = vec![all_lines[i].clone()];
        let mut j = i + 1;
        while j < all_lines.len()
            && block.len() <= tuning.fallback_trail_lines
            && !is_anchor(&all_lines[j])
        {
            block.push(all_lines[j].clone());
            j += 1;
        }
        blocks.push(block);
        i = j;
    }

    blocks
}

/// Experience fallback over the whole cleaned text.
pub fn fallback_experience_blocks(all_lines: &[String], tuning: &Tuning) -> Vec<EntryBlock> {
    fallback_blocks(all_lines, tuning, is_experience_anchor)
}

/// Education fallback over the whole cleaned text.
pub fn fallback_education_blocks(all_lines: &[String], tuning: &Tuning) -> Vec<EntryBlock> {
    fallback_blocks(all_lines, tuning, is_education_anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_block_when_no_boundary() {
        let blocks = segment(&lines(&["Acme Corp", "Built tooling"]), &Tuning::default());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 2);
    }

    #[test]
    fn test_year_starts_new_block_after_two_lines() {
        let blocks = segment(
            &lines(&[
                "Engineer | Acme | 2019 - 2022",
                "Built internal tooling",
                "Developer | Other | 2016 - 2019",
                "Maintained the platform",
            ]),
            &Tuning::default(),
        );
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][0], "Engineer | Acme | 2019 - 2022");
        assert_eq!(blocks[1][0], "Developer | Other | 2016 - 2019");
    }

    #[test]
    fn test_year_does_not_break_a_short_block() {
        // The year on line 2 belongs to the entry opened on line 1.
        let blocks = segment(
            &lines(&["Acme Corp", "2019 - 2022", "Built tooling"]),
            &Tuning::default(),
        );
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_title_hint_breaks_after_three_lines() {
        let blocks = segment(
            &lines(&[
                "Acme Corp",
                "Did backend work",
                "Did frontend work",
                "Ingénieur logiciel chez StartupX",
            ]),
            &Tuning::default(),
        );
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1][0], "Ingénieur logiciel chez StartupX");
    }

    #[test]
    fn test_degree_hint_breaks_after_three_lines() {
        let blocks = segment(
            &lines(&[
                "Universite X",
                "Mention bien",
                "Projet de fin d'annee",
                "Licence Mathématiques",
            ]),
            &Tuning::default(),
        );
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_fallback_experience_anchors_on_years() {
        let all = lines(&[
            "Jane Doe",
            "Engineer | Acme | 2019 - 2022",
            "Built tooling",
            "Shipped things",
            "Developer | Other | 2016",
            "Maintained stuff",
        ]);
        let blocks = fallback_experience_blocks(&all, &Tuning::default());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][0], "Engineer | Acme | 2019 - 2022");
        assert_eq!(blocks[0].len(), 3);
        assert_eq!(blocks[1][0], "Developer | Other | 2016");
    }

    #[test]
    fn test_fallback_trail_cap() {
        let all = lines(&["2019", "a", "b", "c", "d", "e", "f", "g"]);
        let blocks = fallback_experience_blocks(&all, &Tuning::default());
        assert_eq!(blocks.len(), 1);
        // anchor + at most 4 trailing lines
        assert_eq!(blocks[0].len(), 5);
    }

    #[test]
    fn test_fallback_block_cap() {
        let all: Vec<String> = (0..20).map(|i| format!("{}", 1990 + i)).collect();
        let blocks = fallback_experience_blocks(&all, &Tuning::default());
        assert_eq!(blocks.len(), Tuning::default().fallback_max_blocks);
    }

    #[test]
    fn test_fallback_education_anchors() {
        let all = lines(&[
            "Jane Doe",
            "Master Informatique",
            "Universite X 2016",
            "Some club membership",
        ]);
        let blocks = fallback_education_blocks(&all, &Tuning::default());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][0], "Master Informatique");
        assert_eq!(blocks[1][0], "Universite X 2016");
    }

    #[test]
    fn test_empty_input() {
        assert!(segment(&[], &Tuning::default()).is_empty());
        assert!(fallback_experience_blocks(&[], &Tuning::default()).is_empty());
    }
}
