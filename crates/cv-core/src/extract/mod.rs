//! Per-entry and global field extractors.
//!
//! Every function in this tree is total: "nothing found" comes back as an
//! empty string or empty list, never as an error.

pub mod dates;
pub mod education;
pub mod experience;
pub mod personal;
pub mod skills;

use std::sync::LazyLock;

use regex::Regex;

/// Head-line separators: " | ", " - ", " @ ".
static HEAD_SEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" \| | - | @ ").unwrap());

/// Splits an entry head line into at most three parts (two splits), the
/// candidate title/company/location or degree/school/field positions.
pub(crate) fn split_head(head: &str) -> Vec<String> {
    HEAD_SEP_RE
        .splitn(head, 3)
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Strips a leading bullet marker ("- ", "• ", "* ") from a detail line.
pub(crate) fn strip_bullet(line: &str) -> String {
    line.trim_start_matches(['-', '•', '*', ' ']).trim().to_string()
}
