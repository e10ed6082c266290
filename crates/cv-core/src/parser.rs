//! Public parsing surface: the synchronous heuristic pipeline and the
//! assist-backed variant.
//!
//! normalize → split → segment → extract → merge, every stage a pure
//! function over the previous stage's output. Intermediate artifacts are
//! rebuilt on every call; nothing is cached or mutated across requests.

use tracing::debug;

use crate::assist::{refine, AssistProvider};
use crate::config::Tuning;
use crate::extract::education::extract_education;
use crate::extract::experience::extract_experience;
use crate::extract::personal::extract_personal;
use crate::extract::skills::extract_skills;
use crate::merge::merge;
use crate::normalize::normalize;
use crate::schema::StructuredCv;
use crate::sections::{split, SectionMap};
use crate::segment::{fallback_education_blocks, fallback_experience_blocks, segment};

/// Pure heuristic parse. Deterministic, no network, total: any input —
/// including the empty string — yields a schema-valid record.
pub fn parse_locally(text: &str, tuning: &Tuning) -> StructuredCv {
    merge(heuristic_parse(text, tuning), None)
}

/// Heuristic parse plus a best-effort external refinement pass. Vendor
/// failures never surface: the worst case is the heuristic-only record.
pub async fn parse_with_assist(
    text: &str,
    language_hint: Option<&str>,
    providers: &[Box<dyn AssistProvider>],
    tuning: &Tuning,
) -> StructuredCv {
    let lines = normalize(text);
    let heuristic = heuristic_from_lines(&lines, tuning);
    refine(heuristic, &lines.join("\n"), language_hint, providers).await
}

/// Diagnostic view of the section bucketing, for operator tooling.
pub fn debug_sections(text: &str) -> SectionMap {
    split(&normalize(text))
}

fn heuristic_parse(text: &str, tuning: &Tuning) -> StructuredCv {
    heuristic_from_lines(&normalize(text), tuning)
}

fn heuristic_from_lines(lines: &[String], tuning: &Tuning) -> StructuredCv {
    let sections = split(lines);

    let experience_blocks = if sections.experience.is_empty() {
        debug!("no experience bucket, scanning whole text");
        fallback_experience_blocks(lines, tuning)
    } else {
        segment(&sections.experience, tuning)
    };

    let education_blocks = if sections.education.is_empty() {
        debug!("no education bucket, scanning whole text");
        fallback_education_blocks(lines, tuning)
    } else {
        segment(&sections.education, tuning)
    };

    StructuredCv {
        personal: extract_personal(lines),
        summary: sections.summary.join(" "),
        skills: extract_skills(&sections.skills, lines, tuning),
        experience: extract_experience(&experience_blocks, tuning),
        education: extract_education(&education_blocks),
    }
}
