use skald_core::CandidateItem;

use crate::classify::{is_actionable, MIN_LINE_LEN};
use crate::due::extract_due_date;
use crate::negation::is_negative;
use crate::owner::extract_owner;

/// Deterministic fallback pass over a full transcript.
///
/// Walks the lines in order: blanks and too-short lines are dropped,
/// explicit "no action items" statements are suppressed, everything
/// else goes through the actionability heuristic. Emitted items keep
/// transcript order; `task` is the full trimmed line. Never returns
/// an empty list — a transcript with no actionable content yields the
/// single sentinel item.
pub fn extract_rule_based(transcript: &str) -> Vec<CandidateItem> {
    let mut items = Vec::new();

    for line in transcript.lines() {
        let line = line.trim();
        if line.is_empty() || line.chars().count() < MIN_LINE_LEN {
            continue;
        }
        if is_negative(line) {
            continue;
        }
        if !is_actionable(line) {
            continue;
        }
        items.push(CandidateItem {
            task: line.to_string(),
            owner: extract_owner(line),
            due_date: extract_due_date(line),
        });
    }

    if items.is_empty() {
        items.push(CandidateItem::sentinel());
    }
    items
}
