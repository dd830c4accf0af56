mod analysis;
mod config;
mod errors;
mod groq_client;
mod jobs;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::groq_client::GroqClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobSage API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the Groq client. A missing key does not abort startup; the
    // analyze endpoint reports it per request so the jobs proxy stays up.
    let groq = match config.groq_api_key.clone() {
        Some(api_key) => {
            info!(
                "Groq client initialized ({} candidate model(s))",
                config.candidate_models().len()
            );
            Some(GroqClient::new(api_key))
        }
        None => {
            warn!("GROQ_API_KEY not set; analysis requests will fail until it is configured");
            None
        }
    };

    // Plain HTTP client for the jobs proxy
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let state = AppState {
        groq,
        http,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
