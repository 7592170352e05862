use std::sync::LazyLock;

use regex::Regex;

/// Owner forms in priority order: `@handle`, `assigned to <name>`,
/// `(name)`. The marker text matches case-insensitively; the captured
/// token keeps its original casing.
static OWNER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"@(\w+)", r"(?i)assigned to (\w+)", r"\((\w+)\)"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Pull the responsible party out of a line. First matching form
/// wins; multiple candidates are never merged.
pub fn extract_owner(line: &str) -> Option<String> {
    OWNER_PATTERNS.iter().find_map(|p| {
        p.captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    })
}
