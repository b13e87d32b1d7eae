use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

mod app;
mod http;
mod sweep;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nudge_gateway=info,tower_http=debug".into()),
        )
        .init();

    // load config: NUDGE_CONFIG path override > ~/.nudge/nudge.toml
    let config_path = std::env::var("NUDGE_CONFIG").ok();
    let config = nudge_core::NudgeConfig::load(config_path.as_deref())
        .context("failed to load configuration")?;

    let db_path = &config.database.path;
    ensure_parent_dir(db_path);
    info!(path = %db_path, "opening SQLite database");

    let db = rusqlite::Connection::open(db_path)?;
    db.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    let store = Arc::new(nudge_store::SqliteStore::new(db)?);

    let chat = Arc::new(nudge_line::LineClient::new(&config.line.channel_access_token));

    let bind = config.server.bind.clone();
    let port = config.server.port;
    let state = Arc::new(app::AppState::new(config, store, chat));
    let router = app::build_router(Arc::clone(&state));

    // Sweep runs in the background; the watch channel stops it on shutdown.
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let sweep_task = tokio::spawn(sweep::run(Arc::clone(&state), shutdown_rx));

    let addr: SocketAddr = format!("{bind}:{port}")
        .parse()
        .context("invalid bind address")?;
    info!(%addr, "nudge gateway listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    let _ = shutdown_tx.send(true);
    let _ = sweep_task.await;
    Ok(())
}

fn ensure_parent_dir(path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }
}
