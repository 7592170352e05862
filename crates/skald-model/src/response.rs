use anyhow::Context;
use serde::Deserialize;
use skald_core::CandidateItem;

/// One object of the JSON array the model is instructed to return.
/// `owner`/`due_date` may be missing or `null`; `task` is required.
#[derive(Debug, Deserialize)]
struct RawItem {
    task: String,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
}

/// Strip a markdown code fence wrapping the payload, if any.
///
/// Models often return ```json ... ``` despite being told not to.
/// This is a narrow normalization step kept apart from parsing: it
/// only peels one leading fence line and one trailing fence, and
/// leaves anything else untouched.
pub(crate) fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        // Drop the fence line itself ("```" or "```json").
        text = match rest.split_once('\n') {
            Some((_, body)) => body,
            None => rest,
        };
    }
    if let Some(body) = text.trim_end().strip_suffix("```") {
        text = body;
    }
    text.trim()
}

/// Parse the fence-stripped message content as a strict JSON array of
/// candidate items. Anything that still fails to parse is malformed
/// and reported as an error for the caller to log.
pub(crate) fn parse_candidates(content: &str) -> anyhow::Result<Vec<CandidateItem>> {
    let normalized = strip_code_fences(content);
    let raw: Vec<RawItem> =
        serde_json::from_str(normalized).context("model content is not a JSON item array")?;
    Ok(raw
        .into_iter()
        .map(|r| CandidateItem {
            task: r.task,
            owner: r.owner,
            due_date: r.due_date,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_json_passes_through() {
        assert_eq!(strip_code_fences(r#"[{"task":"x"}]"#), r#"[{"task":"x"}]"#);
    }

    #[test]
    fn json_fence_stripped() {
        let raw = "```json\n[{\"task\":\"x\"}]\n```";
        assert_eq!(strip_code_fences(raw), r#"[{"task":"x"}]"#);
    }

    #[test]
    fn anonymous_fence_stripped() {
        let raw = "```\n[]\n```";
        assert_eq!(strip_code_fences(raw), "[]");
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        assert_eq!(strip_code_fences("  \n[]\n  "), "[]");
    }

    #[test]
    fn parses_full_items() {
        let items = parse_candidates(
            r#"[{"task":"Ship v2","owner":"bob","due_date":"2025-01-10"}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task, "Ship v2");
        assert_eq!(items[0].owner.as_deref(), Some("bob"));
        assert_eq!(items[0].due_date.as_deref(), Some("2025-01-10"));
    }

    #[test]
    fn null_and_missing_fields_become_absent() {
        let items =
            parse_candidates(r#"[{"task":"Ship v2","owner":null},{"task":"File the report"}]"#)
                .unwrap();
        assert!(items[0].owner.is_none());
        assert!(items[0].due_date.is_none());
        assert!(items[1].owner.is_none());
    }

    #[test]
    fn fenced_payload_parses() {
        let items = parse_candidates("```json\n[{\"task\":\"Ship v2\"}]\n```").unwrap();
        assert_eq!(items[0].task, "Ship v2");
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_candidates("[]").unwrap().is_empty());
    }

    #[test]
    fn missing_task_is_malformed() {
        assert!(parse_candidates(r#"[{"owner":"bob"}]"#).is_err());
    }

    #[test]
    fn prose_is_malformed() {
        assert!(parse_candidates("Here are your action items: none.").is_err());
    }
}
