use skald_core::{ExtractionResult, Source};
use skald_model::{ModelExtractor, ModelOutcome};
use skald_rules::extract_rule_based;

/// One-way extraction pipeline: transcript in, tagged item list out.
///
/// The model pass runs first; the deterministic rule-based pass is
/// the fallback. Each call is stateless and independent — the
/// extractor holds only immutable configuration, so concurrent calls
/// need no coordination.
pub struct Pipeline {
    model: ModelExtractor,
}

impl Pipeline {
    pub fn new(model: ModelExtractor) -> Self {
        Self { model }
    }

    /// Pipeline configured from the environment (`GROQ_API_KEY`).
    pub fn from_env() -> Self {
        Self::new(ModelExtractor::from_env())
    }

    /// Pipeline that only ever runs the rule-based pass.
    pub fn rules_only() -> Self {
        Self::new(ModelExtractor::disabled())
    }

    /// Extract action items from a transcript. At most one model
    /// request, no retries; a failed or empty model pass triggers
    /// exactly one synchronous rule-based pass. The result is never
    /// empty (the rule-based pass guarantees a sentinel).
    pub async fn extract(&self, transcript: &str) -> ExtractionResult {
        resolve(self.model.extract(transcript).await, transcript)
    }
}

/// Strict precedence, not a quality comparison: any non-empty model
/// output wins outright; `Unavailable` and empty output both fall
/// through to the rule-based pass.
fn resolve(outcome: ModelOutcome, transcript: &str) -> ExtractionResult {
    match outcome {
        ModelOutcome::Extracted(items) if !items.is_empty() => ExtractionResult {
            items,
            source: Source::Model,
        },
        ModelOutcome::Extracted(_) | ModelOutcome::Unavailable => {
            tracing::debug!("model pass produced nothing, running rule-based pass");
            ExtractionResult {
                items: extract_rule_based(transcript),
                source: Source::RuleBased,
            }
        }
    }
}
