mod agent_client;
mod config;
mod errors;
mod market;
mod models;
mod profile;
mod readiness;
mod routes;
mod skills;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agent_client::AgentClient;
use crate::config::Config;
use crate::profile::store::SessionStore;
use crate::routes::build_router;
use crate::skills::extraction::AgentSkillExtractor;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillForge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize agent client
    let agent = AgentClient::new(
        &config.agent_server_url,
        Duration::from_secs(config.agent_timeout_secs),
    )
    .context("Failed to build agent HTTP client")?;
    info!(
        "Agent client initialized (server: {}, timeout: {}s)",
        config.agent_server_url, config.agent_timeout_secs
    );

    // Skill extraction goes through the agent's skill_analyzer_agent walker
    let skill_extractor = Arc::new(AgentSkillExtractor(agent.clone()));

    // Build app state
    let state = AppState {
        agent,
        sessions: SessionStore::new(),
        skill_extractor,
    };

    // Build router (dashboard is served from a different origin)
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
