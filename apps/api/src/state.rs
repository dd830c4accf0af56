use crate::config::Config;
use crate::groq_client::GroqClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `GROQ_API_KEY` is unset; the analyze handler reports that
    /// as a configuration error per request.
    pub groq: Option<GroqClient>,
    /// Plain HTTP client for the jobs proxy.
    pub http: reqwest::Client,
    pub config: Config,
}
