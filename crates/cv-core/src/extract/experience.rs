//! Experience extractor: entry blocks → `ExperienceEntry` records.

use crate::config::Tuning;
use crate::extract::dates::{extract_date_range, is_date_fragment};
use crate::extract::{split_head, strip_bullet};
use crate::schema::ExperienceEntry;
use crate::segment::EntryBlock;

/// Word count above which a second line is not read as a company name.
const COMPANY_BACKFILL_MAX_WORDS: usize = 6;

pub fn extract_experience(blocks: &[EntryBlock], tuning: &Tuning) -> Vec<ExperienceEntry> {
    blocks
        .iter()
        .filter_map(|b| entry_from_block(b, tuning))
        .collect()
}

fn entry_from_block(block: &EntryBlock, tuning: &Tuning) -> Option<ExperienceEntry> {
    let head = block.first()?;
    let parts = split_head(head);

    let title = head_part(&parts, 0);
    let mut company = head_part(&parts, 1);
    let location = head_part(&parts, 2);
    let (start_date, end_date) = extract_date_range(block);

    // A short second line often carries the employer when the head held
    // only the title.
    let mut backfilled_company_line = None;
    if company.is_empty() {
        if let Some(second) = block.get(1) {
            if second.split_whitespace().count() <= COMPANY_BACKFILL_MAX_WORDS
                && !second.starts_with(['-', '•', '*'])
                && !is_date_fragment(second)
            {
                company = second.clone();
                backfilled_company_line = Some(1);
            }
        }
    }

    let highlights = if block.len() == 1 {
        vec![head.clone()]
    } else {
        collect_highlights(block, backfilled_company_line, tuning.max_highlights)
    };

    if title.is_empty() && company.is_empty() && highlights.is_empty() {
        return None;
    }

    Some(ExperienceEntry {
        company,
        title,
        start_date,
        end_date,
        location,
        highlights,
    })
}

/// Reads one head-split position, discarding parts that are pure date
/// material ("2018 - 2021" must never become a company or location).
fn head_part(parts: &[String], idx: usize) -> String {
    parts
        .get(idx)
        .filter(|p| !is_date_fragment(p))
        .cloned()
        .unwrap_or_default()
}

fn collect_highlights(block: &EntryBlock, skip: Option<usize>, cap: usize) -> Vec<String> {
    let mut highlights: Vec<String> = Vec::new();
    for (i, line) in block.iter().enumerate().skip(1) {
        if Some(i) == skip {
            continue;
        }
        let detail = strip_bullet(line);
        if detail.is_empty() || is_date_fragment(&detail) {
            continue;
        }
        if highlights.contains(&detail) {
            continue;
        }
        highlights.push(detail);
        if highlights.len() == cap {
            break;
        }
    }
    highlights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(raw: &[&str]) -> EntryBlock {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_head_split_with_dates_in_tail() {
        let entries = extract_experience(
            &[block(&["Software Engineer | Acme Corp | 2019 - 2022", "Built internal tooling"])],
            &Tuning::default(),
        );
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.title, "Software Engineer");
        assert_eq!(e.company, "Acme Corp");
        assert_eq!(e.location, "");
        assert_eq!(e.start_date, "2019");
        assert_eq!(e.end_date, "2022");
        assert_eq!(e.highlights, vec!["Built internal tooling"]);
    }

    #[test]
    fn test_location_at_third_position() {
        let entries = extract_experience(
            &[block(&["Consultant @ BigCo @ Lyon", "Advised on data platform"])],
            &Tuning::default(),
        );
        assert_eq!(entries[0].location, "Lyon");
        assert_eq!(entries[0].company, "BigCo");
    }

    #[test]
    fn test_single_line_block_becomes_sole_highlight() {
        let entries = extract_experience(
            &[block(&["Senior Engineer | Acme | 2018 - 2021"])],
            &Tuning::default(),
        );
        assert_eq!(entries[0].highlights, vec!["Senior Engineer | Acme | 2018 - 2021"]);
        assert_eq!(entries[0].title, "Senior Engineer");
    }

    #[test]
    fn test_company_backfill_from_short_second_line() {
        let entries = extract_experience(
            &[block(&["Software Engineer", "Acme Corp", "- Did backend work"])],
            &Tuning::default(),
        );
        let e = &entries[0];
        assert_eq!(e.company, "Acme Corp");
        // The consumed company line is not also a highlight.
        assert_eq!(e.highlights, vec!["Did backend work"]);
    }

    #[test]
    fn test_no_backfill_from_long_second_line() {
        let entries = extract_experience(
            &[block(&[
                "Software Engineer",
                "Worked on many different internal projects there",
            ])],
            &Tuning::default(),
        );
        assert_eq!(entries[0].company, "");
    }

    #[test]
    fn test_bullets_stripped_and_deduped_in_order() {
        let entries = extract_experience(
            &[block(&[
                "Engineer | Acme",
                "- Shipped the v2 API",
                "• Shipped the v2 API",
                "* Cut build times",
            ])],
            &Tuning::default(),
        );
        assert_eq!(entries[0].highlights, vec!["Shipped the v2 API", "Cut build times"]);
    }

    #[test]
    fn test_highlights_capped() {
        let mut lines = vec!["Engineer | Acme".to_string()];
        for i in 0..12 {
            lines.push(format!("- Highlight number {i}"));
        }
        let entries = extract_experience(&[lines], &Tuning::default());
        assert_eq!(entries[0].highlights.len(), Tuning::default().max_highlights);
    }

    #[test]
    fn test_date_only_lines_are_not_highlights() {
        let entries = extract_experience(
            &[block(&["Engineer | Acme", "2019 - 2022", "Built the thing"])],
            &Tuning::default(),
        );
        assert_eq!(entries[0].highlights, vec!["Built the thing"]);
        assert_eq!(entries[0].start_date, "2019");
    }

    #[test]
    fn test_empty_block_yields_nothing() {
        let entries = extract_experience(
            &[block(&["2018 - 2021", "2016 - 2017"])],
            &Tuning::default(),
        );
        assert!(entries.is_empty());
    }
}
