//! Education extractor: entry blocks → `EducationEntry` records.

use crate::extract::dates::{extract_date_range, is_date_fragment};
use crate::extract::{split_head, strip_bullet};
use crate::schema::EducationEntry;
use crate::segment::EntryBlock;

/// Word count above which a second line is not read as a school name.
const SCHOOL_BACKFILL_MAX_WORDS: usize = 6;

/// Detail lines joined into `details`: lines 2–4 of the block.
const DETAIL_LINES: std::ops::Range<usize> = 1..4;

pub fn extract_education(blocks: &[EntryBlock]) -> Vec<EducationEntry> {
    blocks.iter().filter_map(entry_from_block).collect()
}

fn entry_from_block(block: &EntryBlock) -> Option<EducationEntry> {
    let head = block.first()?;
    let parts = split_head(head);

    let degree = head_part(&parts, 0);
    let mut school = head_part(&parts, 1);
    let field = head_part(&parts, 2);
    let (start_date, end_date) = extract_date_range(block);

    let mut backfilled_school_line = None;
    if school.is_empty() {
        if let Some(second) = block.get(1) {
            if second.split_whitespace().count() <= SCHOOL_BACKFILL_MAX_WORDS
                && !second.starts_with(['-', '•', '*'])
                && !is_date_fragment(second)
            {
                school = second.clone();
                backfilled_school_line = Some(1);
            }
        }
    }

    let details = block
        .iter()
        .enumerate()
        .skip(DETAIL_LINES.start)
        .take_while(|(i, _)| *i < DETAIL_LINES.end)
        .filter(|(i, _)| Some(*i) != backfilled_school_line)
        .map(|(_, line)| strip_bullet(line))
        .filter(|d| !d.is_empty() && !is_date_fragment(d))
        .collect::<Vec<_>>()
        .join("; ");

    if degree.is_empty() && school.is_empty() && details.is_empty() {
        return None;
    }

    Some(EducationEntry {
        school,
        degree,
        field,
        start_date,
        end_date,
        details,
    })
}

fn head_part(parts: &[String], idx: usize) -> String {
    parts
        .get(idx)
        .filter(|p| !is_date_fragment(p))
        .cloned()
        .unwrap_or_default()
}
