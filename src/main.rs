//! Number Window Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring config, shared window state, routes,
//! and request tracing.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use number_window_service::config::ServiceConfig;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = ServiceConfig::from_env();
    let router = number_window_service::app_with_config(&cfg)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(
        port = cfg.port,
        capacity = cfg.window_capacity,
        upstream = %cfg.upstream_base_url,
        "server is running"
    );
    axum::serve(listener, router).await.context("serving http")?;

    Ok(())
}
