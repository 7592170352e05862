use std::sync::LazyLock;

use regex::Regex;

/// Compiled negation patterns, initialized once. Each is a loose
/// substring match against the lowercased line, so surrounding text
/// ("No further action items were raised.") still triggers it.
static NEGATIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bno\s+(?:other\s+|further\s+)?action\s+items?\b",
        r"\bno\s+action\s+required\b",
        r"\bnothing\s+else\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// True when the line explicitly denies that action items exist.
///
/// A negation match suppresses the line outright: it is never
/// classified as actionable, even if it also contains an action
/// keyword like "action".
pub fn is_negative(line: &str) -> bool {
    let text = line.trim().to_lowercase();
    NEGATIVE_PATTERNS.iter().any(|p| p.is_match(&text))
}
