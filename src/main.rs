use std::sync::Arc;

use anyhow::Context;

use pager_karaoke::apl::DocumentStore;
use pager_karaoke::config::SkillConfig;
use pager_karaoke::handlers::skill_router;
use pager_karaoke::logging::init_tracing;
use pager_karaoke::server::{AppState, skill_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SkillConfig::from_env().context("Invalid configuration")?;

    let _log_guard = init_tracing(&config).context("Failed to open log directory")?;

    eprintln!("🎤 Pager Karaoke v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Endpoint: http://{}/", config.listen_addr());
    eprintln!("   Documents: {}", config.documents_dir.display());
    eprintln!(
        "   Skill ID: {}",
        config.skill_id.as_deref().unwrap_or("(not verified)")
    );

    let router = Arc::new(skill_router(&config));
    tracing::info!(handlers = ?router.handler_names(), "Skill router built");

    let app = skill_routes(AppState {
        router,
        documents: Arc::new(DocumentStore::new(config.documents_dir.clone())),
        timestamp_tolerance_secs: config.timestamp_tolerance_secs,
    });

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr()))?;
    tracing::info!(addr = %config.listen_addr(), "Skill endpoint started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
