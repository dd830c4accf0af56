//! Groq client — the single point of entry for all chat-completion calls.
//!
//! No other module may call the Groq API directly; handlers go through
//! [`complete_with_fallback`], which walks an ordered candidate-model list and
//! only advances past a candidate when the provider says that model itself is
//! unusable (decommissioned, not found, 404). Every other failure is fatal.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// Model used when neither `GROQ_MODEL` nor `GROQ_MODEL_FALLBACK` is set.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum GroqError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("no candidate models to try")]
    NoCandidates,
}

impl GroqError {
    /// True when the provider rejected the *model*, not the request: the
    /// message names a decommissioned or unknown model, or the status is 404.
    /// These are the only errors the candidate-fallback loop recovers from.
    pub fn is_model_unavailable(&self) -> bool {
        match self {
            GroqError::Api { status, message } => {
                *status == 404
                    || message.contains("model_decommissioned")
                    || message.contains("model_not_found")
                    || message.contains("does not exist")
            }
            _ => false,
        }
    }

    pub fn is_decommissioned(&self) -> bool {
        matches!(self, GroqError::Api { message, .. } if message.contains("model_decommissioned"))
    }
}

/// One role-tagged chat message. The prompt builder always produces exactly
/// two: a system instruction followed by the user content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Per-mode sampling settings. `top_p`, `stream`, and `stop` are fixed on the
/// wire (1 / false / null).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
struct GroqChatRequest<'a> {
    messages: &'a [ChatMessage],
    model: &'a str,
    temperature: f32,
    max_completion_tokens: u32,
    top_p: u8,
    stream: bool,
    stop: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqChatResponse {
    #[serde(default)]
    choices: Vec<GroqChoice>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct GroqChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqApiError {
    error: GroqApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GroqApiErrorBody {
    message: String,
}

/// Seam between the invoker and the provider so the fallback loop is testable
/// without the network. `GroqClient` is the only production implementation.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        params: GenerationParams,
    ) -> Result<String, GroqError>;
}

/// The Groq chat-completions client used by all handlers.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for GroqClient {
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        params: GenerationParams,
    ) -> Result<String, GroqError> {
        let request_body = GroqChatRequest {
            messages,
            model,
            temperature: params.temperature,
            max_completion_tokens: params.max_tokens,
            top_p: 1,
            stream: false,
            stop: None,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the structured error message; fall back to the raw body
            let message = serde_json::from_str::<GroqApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GroqError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: GroqChatResponse = response.json().await?;

        // An empty generation is not an error: the extractor's mode fallbacks
        // absorb the sentinel.
        Ok(chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "No result.".to_string()))
    }
}

/// The text of a successful completion plus the candidate that produced it.
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    pub text: String,
    pub model: String,
}

/// Attempts each candidate model in order, returning the first success.
///
/// A model-unavailable error advances to the next candidate; any other error
/// propagates immediately. If every candidate is unavailable, the last
/// recorded error propagates.
pub async fn complete_with_fallback<B: CompletionBackend + ?Sized>(
    backend: &B,
    messages: &[ChatMessage],
    params: GenerationParams,
    candidates: &[String],
) -> Result<CompletionOutcome, GroqError> {
    let mut last_err: Option<GroqError> = None;

    for candidate in candidates {
        match backend.chat(candidate, messages, params).await {
            Ok(text) => {
                info!(model = %candidate, "Groq model used");
                return Ok(CompletionOutcome {
                    text,
                    model: candidate.clone(),
                });
            }
            Err(e) if e.is_model_unavailable() => {
                warn!(model = %candidate, reason = %e, "Model unavailable, trying next candidate");
                last_err = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_err.unwrap_or(GroqError::NoCandidates))
}
