use serde::{Deserialize, Serialize};

/// Task text of the placeholder item emitted when a transcript yields
/// no actionable lines. Guarantees the rule-based pass is never empty.
pub const SENTINEL_TASK: &str = "No action items detected";

/// An extracted action item before the persistence layer assigns it
/// identity. `owner` and `due_date` serialize as explicit `null` when
/// absent; `due_date` is an ISO calendar date (`YYYY-MM-DD`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateItem {
    pub task: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl CandidateItem {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            owner: None,
            due_date: None,
        }
    }

    /// The fixed placeholder item for transcripts with no actionable content.
    pub fn sentinel() -> Self {
        Self::new(SENTINEL_TASK)
    }

    pub fn is_sentinel(&self) -> bool {
        self.task == SENTINEL_TASK && self.owner.is_none() && self.due_date.is_none()
    }
}

/// Which extraction path produced a result. Recorded for
/// observability/auditing only, never used to filter items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Model,
    RuleBased,
}

/// Ordered extraction output plus its provenance tag. Item order is
/// transcript order on the rule-based path and model order otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionResult {
    pub items: Vec<CandidateItem>,
    pub source: Source,
}
