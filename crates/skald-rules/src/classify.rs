use std::sync::LazyLock;

use regex::Regex;

/// Lines with fewer characters than this are discarded before
/// classification: too short to be a meaningful task.
pub const MIN_LINE_LEN: usize = 10;

/// Modal/obligation words and explicit action markers, matched
/// case-insensitively anywhere in the line.
const ACTION_KEYWORDS: &[&str] = &[
    "will",
    "should",
    "needs to",
    "need to",
    "must",
    "action",
    "todo",
    "follow up",
    "assign",
    "responsible",
];

/// Leading list/numbering marker: `-`, `*`, or digits followed by `.`.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:[-*]|\d+\.)").unwrap());

/// Cheap, high-recall actionability heuristic: a keyword hit or a
/// leading list marker qualifies the line. False positives are
/// acceptable; downstream consumers treat items as suggestions.
pub fn is_actionable(line: &str) -> bool {
    let lower = line.to_lowercase();
    ACTION_KEYWORDS.iter().any(|k| lower.contains(k)) || LIST_MARKER.is_match(line)
}
