use std::time::Duration;

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use skald_core::CandidateItem;

use crate::response::parse_candidates;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama3-8b-8192";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// OpenAI-compatible chat-completions wire types.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// Outcome of the model pass. `Unavailable` covers every non-success:
/// missing credential, network or HTTP failure, timeout, malformed
/// content. It is a normal routing signal, not an error — the caller
/// branches on it to invoke the deterministic fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOutcome {
    Extracted(Vec<CandidateItem>),
    Unavailable,
}

/// Remote model collaborator, consumed as an opaque
/// text -> candidate-items function. All configuration is explicit
/// and fixed at construction; nothing reads ambient state afterwards.
pub struct ModelExtractor {
    api_key: Option<String>,
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

impl ModelExtractor {
    /// Read `GROQ_API_KEY` once at construction. An unset or empty
    /// variable leaves the extractor disabled.
    pub fn from_env() -> Self {
        let key = std::env::var("GROQ_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        Self::new(key)
    }

    pub fn new(api_key: Option<String>) -> Self {
        let client = build_client(REQUEST_TIMEOUT).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "HTTP client builder failed, requests will not time out");
            reqwest::Client::new()
        });
        Self {
            api_key,
            endpoint: GROQ_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            client,
        }
    }

    /// An extractor that always reports `Unavailable` without touching
    /// the network.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// Override the endpoint URL (tests point this at a local mock).
    pub fn with_endpoint(mut self, url: &str) -> Self {
        self.endpoint = url.to_string();
        self
    }

    /// Override the model name.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Override the request timeout. If the client cannot be rebuilt
    /// the previous client (and its timeout) is kept, with a warning.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        match build_client(timeout) {
            Ok(client) => self.client = client,
            Err(err) => {
                tracing::warn!(error = %err, "HTTP client builder failed, keeping previous timeout");
            }
        }
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Run the model pass over a transcript. Issues at most one
    /// request; every failure mode is logged and collapsed into
    /// `Unavailable`, never raised to the caller.
    pub async fn extract(&self, text: &str) -> ModelOutcome {
        let Some(key) = self.api_key.as_deref() else {
            return ModelOutcome::Unavailable;
        };

        match self.request_items(key, text).await {
            Ok(items) => ModelOutcome::Extracted(items),
            Err(err) => {
                tracing::warn!(error = %err, "model extraction failed");
                ModelOutcome::Unavailable
            }
        }
    }

    async fn request_items(&self, key: &str, text: &str) -> anyhow::Result<Vec<CandidateItem>> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: extraction_prompt(text),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(key)
            .json(&request)
            .send()
            .await
            .context("model request failed")?
            .error_for_status()
            .context("model returned an error status")?;

        let body: ChatResponse = response
            .json()
            .await
            .context("model response is not valid JSON")?;
        let content = body
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| anyhow!("model response has no choices"))?;

        parse_candidates(content)
    }
}

fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}

fn extraction_prompt(text: &str) -> String {
    format!(
        "Extract action items from this transcript.\n\
         Return ONLY a JSON array.\n\n\
         Format:\n\
         [{{\"task\": \"...\", \"owner\": null, \"due_date\": null}}]\n\n\
         Transcript:\n{text}"
    )
}
