use anyhow::{Context, Result};

use crate::groq_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
///
/// `GROQ_API_KEY` is expected but its absence does not abort startup: the
/// analyze endpoint reports it as a configuration error per request, so the
/// jobs proxy and health endpoint stay available.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_model: Option<String>,
    pub groq_model_fallback: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_model: optional_env("GROQ_MODEL"),
            groq_model_fallback: optional_env("GROQ_MODEL_FALLBACK"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The ordered model candidates the completion invoker walks through:
    /// `GROQ_MODEL` first, then each entry of the comma-separated
    /// `GROQ_MODEL_FALLBACK`, then the built-in default if nothing was set.
    pub fn candidate_models(&self) -> Vec<String> {
        build_candidates(
            self.groq_model.as_deref(),
            self.groq_model_fallback.as_deref(),
        )
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Builds the deduplicated candidate list from the two config sources.
/// Never returns an empty list.
fn build_candidates(primary: Option<&str>, fallback_csv: Option<&str>) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    if let Some(primary) = primary {
        let primary = primary.trim();
        if !primary.is_empty() {
            candidates.push(primary.to_string());
        }
    }

    if let Some(csv) = fallback_csv {
        for entry in csv.split(',') {
            let entry = entry.trim();
            if !entry.is_empty() && !candidates.iter().any(|c| c == entry) {
                candidates.push(entry.to_string());
            }
        }
    }

    if candidates.is_empty() {
        candidates.push(DEFAULT_MODEL.to_string());
    }

    candidates
}
