use std::path::PathBuf;
use std::sync::Arc;

use bookmarks::bookmarks::BookmarkStore;
use bookmarks::build_app;
use bookmarks::config::{Cli, Config};
use bookmarks::handler::AppState;
use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    dotenvy::dotenv().ok();

    let config_path = args.config_path.map(PathBuf::from);
    let mut cfg = Config::resolve(config_path.as_deref()).unwrap_or_else(|e| {
        eprintln!("failed to load config file {:?}: {:#}", config_path, e);
        std::process::exit(1);
    });
    if let Some(port) = args.port {
        cfg.app.set_port(port);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.app.log_level.as_str()));
    tracing_subscriber::fmt().json().with_env_filter(filter).init();
    tracing::info!("bookmarks.svc starting");
    for var in cfg.missing_env_vars() {
        tracing::warn!("environment variable '{}' not found", var);
    }

    let store = Arc::new(BookmarkStore::new());
    let app = build_app(AppState::new(store, cfg.app.public_url.clone()));

    let address = format!("0.0.0.0:{}", cfg.app.get_port());
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to setup tcp listener");
            std::process::exit(1);
        });

    let cancellation_token = CancellationToken::new();
    let shutdown_token = cancellation_token.clone();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl+c");
            return;
        }
        tracing::info!("ctrl+c signal received, preparing to shutdown");
        cancellation_token.cancel();
    });

    tracing::info!("bookmarks.svc running on {}", &address);
    let result = axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown_token.cancelled().await })
        .await;

    if let Err(err) = result {
        tracing::error!(error = %err, "server terminated unexpectedly");
        std::process::exit(1);
    }

    tracing::info!("bookmarks.svc going off, graceful shutdown complete");
}
