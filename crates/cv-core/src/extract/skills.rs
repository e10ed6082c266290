//! Skills extractor: tokenize the skills bucket, or fall back to a
//! vocabulary sweep of the whole document.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::Tuning;
use crate::extract::strip_bullet;
use crate::text::{contains_word, fold, title_case_words};
use crate::vocab::{SKILLS_LABELS, TECH_SKILLS};

/// Tokens longer than this are sentences, not skills.
const SKILL_MAX_CHARS: usize = 35;

static PURE_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(19|20)\d{2}$").unwrap());

pub fn extract_skills(skills_lines: &[String], all_lines: &[String], tuning: &Tuning) -> Vec<String> {
    let raw = if skills_lines.is_empty() {
        sweep_vocabulary(all_lines)
    } else {
        tokenize_bucket(skills_lines)
    };
    dedup_case_insensitive(raw, tuning.max_skills)
}

/// Splits the skills bucket on list separators, dropping labels, years and
/// over-long tokens.
fn tokenize_bucket(lines: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for line in lines {
        let line = strip_bullet(line);
        let line = strip_label(&line);
        for token in line.split([',', ';', '/', '|']) {
            let token = token.trim();
            if token.is_empty()
                || token.chars().count() > SKILL_MAX_CHARS
                || PURE_YEAR_RE.is_match(token)
            {
                continue;
            }
            out.push(token.to_string());
        }
    }
    out
}

/// Removes a leading "Compétences :" style label.
fn strip_label(line: &str) -> String {
    if let Some((before, after)) = line.split_once(':') {
        if SKILLS_LABELS.contains(&fold(before).trim()) {
            return after.trim().to_string();
        }
    }
    line.to_string()
}

/// Whole-document fallback: collect known technology names, skipping the
/// name line and contact lines.
fn sweep_vocabulary(all_lines: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for (i, line) in all_lines.iter().enumerate() {
        if line.contains('@') || (i == 0 && looks_like_name_line(line)) {
            continue;
        }
        let folded = fold(line);
        for skill in TECH_SKILLS {
            if contains_word(&folded, skill) {
                out.push(original_casing(line, skill));
            }
        }
    }
    out
}

fn looks_like_name_line(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    (2..=4).contains(&tokens.len())
        && tokens
            .iter()
            .all(|t| t.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\''))
}

/// Finds the skill as it was written on the line; falls back to a
/// title-cased vocabulary entry for multi-word matches.
fn original_casing(line: &str, skill: &str) -> String {
    line.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#')))
        .find(|t| fold(t) == skill)
        .map(str::to_string)
        .unwrap_or_else(|| title_case_words(skill))
}

/// First-seen wins, case-insensitively, original casing kept.
fn dedup_case_insensitive(raw: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for skill in raw {
        if seen.insert(skill.to_lowercase()) {
            out.push(skill);
            if out.len() == cap {
                break;
            }
        }
    }
    out
}
