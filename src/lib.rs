// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod average;
pub mod config;
pub mod error;
pub mod fetch;
pub mod metrics;
pub mod window;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::error::ServiceError;

/// Build the full service router from the environment, exactly as the
/// binary does.
pub fn app() -> anyhow::Result<Router> {
    let cfg = config::ServiceConfig::from_env();
    app_with_config(&cfg)
}

/// Build the router for an already-resolved configuration.
pub fn app_with_config(cfg: &config::ServiceConfig) -> anyhow::Result<Router> {
    let window = Arc::new(window::NumberWindow::with_capacity(cfg.window_capacity));
    let source: Arc<dyn fetch::NumberSource> = Arc::new(
        fetch::UpstreamClient::new(cfg.upstream_base_url.as_str(), cfg.upstream_timeout)
            .context("building upstream client")?,
    );
    Ok(api::router(AppState { window, source }))
}
