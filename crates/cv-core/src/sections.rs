//! Section Splitter — buckets cleaned lines under the header that precedes
//! them.
//!
//! One current-section pointer walks the lines; a line that reads as a
//! section header (multilingual alias match) switches the pointer and is
//! consumed, every other line lands in the active bucket. Lines before the
//! first header land in `other`.

use serde::Serialize;
use tracing::debug;

use crate::text::{contains_word, fold};
use crate::vocab::{EDUCATION_ALIASES, EXPERIENCE_ALIASES, SKILLS_ALIASES, SUMMARY_ALIASES};

/// A header candidate longer than this (after stripping) is never a header.
const HEADER_MAX_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
    Other,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Other => "other",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Section::Summary => SUMMARY_ALIASES,
            Section::Experience => EXPERIENCE_ALIASES,
            Section::Education => EDUCATION_ALIASES,
            Section::Skills => SKILLS_ALIASES,
            Section::Other => &[],
        }
    }
}

/// Header-detection order. First match wins.
const HEADED_SECTIONS: [Section; 4] = [
    Section::Summary,
    Section::Experience,
    Section::Education,
    Section::Skills,
];

/// Cleaned lines bucketed by section, in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SectionMap {
    pub summary: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    pub other: Vec<String>,
}

impl SectionMap {
    fn bucket_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Summary => &mut self.summary,
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Skills => &mut self.skills,
            Section::Other => &mut self.other,
        }
    }
}

/// Buckets cleaned lines into sections. Every non-header line lands in
/// exactly one bucket; order within a bucket is input order.
pub fn split(lines: &[String]) -> SectionMap {
    let mut map = SectionMap::default();
    let mut current = Section::Other;

    for line in lines {
        if let Some(section) = detect_header(line) {
            debug!(from = current.as_str(), to = section.as_str(), line = %line, "section switch");
            current = section;
            continue; // the header line itself is consumed
        }
        map.bucket_mut(current).push(line.clone());
    }

    map
}

/// Tries to read a line as a section header.
///
/// The candidate is diacritic-folded, lowercased, and stripped of
/// surrounding punctuation before matching. Exact and `alias:`-style
/// prefix matches are tried for every section before the looser
/// whole-word containment, so "Parcours Académique" is not captured by a
/// shorter alias of another section.
fn detect_header(line: &str) -> Option<Section> {
    let folded = fold(line);
    let stripped = folded.trim_matches(|c: char| !c.is_alphanumeric());
    if stripped.is_empty() || stripped.chars().count() > HEADER_MAX_CHARS {
        return None;
    }

    for section in HEADED_SECTIONS {
        for alias in section.aliases() {
            if stripped == *alias || has_separator_prefix(stripped, alias) {
                return Some(section);
            }
        }
    }
    for section in HEADED_SECTIONS {
        for alias in section.aliases() {
            if contains_word(stripped, alias) {
                return Some(section);
            }
        }
    }
    None
}

/// "experience:", "experience - 10 ans", "competences | outils".
fn has_separator_prefix(stripped: &str, alias: &str) -> bool {
    stripped
        .strip_prefix(alias)
        .is_some_and(|rest| rest.starts_with(':') || rest.starts_with(" -") || rest.starts_with(" |"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lines_before_any_header_go_to_other() {
        let map = split(&lines(&["Jane Doe", "jane@example.com"]));
        assert_eq!(map.other, vec!["Jane Doe", "jane@example.com"]);
        assert!(map.experience.is_empty());
    }

    #[test]
    fn test_header_switches_and_is_consumed() {
        let map = split(&lines(&["Experience", "Acme Corp", "Education", "MIT"]));
        assert_eq!(map.experience, vec!["Acme Corp"]);
        assert_eq!(map.education, vec!["MIT"]);
        assert!(map.other.is_empty());
    }

    #[test]
    fn test_french_headers_with_accents() {
        let map = split(&lines(&[
            "Expérience Professionnelle",
            "Dev chez Acme",
            "Compétences",
            "Python",
        ]));
        assert_eq!(map.experience, vec!["Dev chez Acme"]);
        assert_eq!(map.skills, vec!["Python"]);
    }

    #[test]
    fn test_header_with_separator_suffix() {
        let map = split(&lines(&["Compétences : techniques", "Python"]));
        assert_eq!(map.skills, vec!["Python"]);
    }

    #[test]
    fn test_decorated_header() {
        let map = split(&lines(&["--- FORMATION ---", "Master Informatique"]));
        assert_eq!(map.education, vec!["Master Informatique"]);
    }

    #[test]
    fn test_education_alias_not_shadowed_by_experience() {
        let map = split(&lines(&["Parcours Académique", "Master X"]));
        assert_eq!(map.education, vec!["Master X"]);
        assert!(map.experience.is_empty());
    }

    #[test]
    fn test_long_line_is_not_a_header() {
        let long = format!("experience {}", "tres longue ligne ".repeat(4));
        let map = split(&lines(&[&long]));
        // 60+ chars after stripping: stays content
        assert_eq!(map.other.len(), 1);
    }

    #[test]
    fn test_coverage_every_non_header_line_exactly_once() {
        let input = lines(&[
            "Jane Doe",
            "Summary",
            "Ten years of backend work",
            "Experience",
            "Engineer | Acme | 2019 - 2022",
            "Built things",
            "Education",
            "Master Informatique | Universite X",
            "Skills",
            "Python, SQL",
        ]);
        let map = split(&input);
        let mut recombined = Vec::new();
        recombined.extend(map.other.clone());
        recombined.extend(map.summary.clone());
        recombined.extend(map.experience.clone());
        recombined.extend(map.education.clone());
        recombined.extend(map.skills.clone());
        let non_headers: Vec<String> = input
            .iter()
            .filter(|l| {
                !matches!(
                    l.as_str(),
                    "Summary" | "Experience" | "Education" | "Skills"
                )
            })
            .cloned()
            .collect();
        assert_eq!(recombined.len(), non_headers.len());
        for line in non_headers {
            assert_eq!(recombined.iter().filter(|l| **l == line).count(), 1);
        }
    }

    #[test]
    fn test_empty_input() {
        let map = split(&[]);
        assert!(map.other.is_empty() && map.summary.is_empty());
    }
}
