// src/config.rs
use std::time::Duration;

// --- env names & defaults ---
pub const ENV_PORT: &str = "PORT";
pub const ENV_WINDOW_SIZE: &str = "WINDOW_SIZE";
pub const ENV_UPSTREAM_BASE_URL: &str = "UPSTREAM_BASE_URL";
pub const ENV_UPSTREAM_TIMEOUT_MS: &str = "UPSTREAM_TIMEOUT_MS";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WINDOW_SIZE: usize = 10;
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "http://20.244.56.144";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5_000;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub window_capacity: usize,
    pub upstream_base_url: String,
    pub upstream_timeout: Duration,
}

impl ServiceConfig {
    /// Resolve from the environment. Unset or unparsable values fall back
    /// to the defaults; the window capacity is clamped to at least 1.
    pub fn from_env() -> Self {
        let port = parse_env(ENV_PORT).unwrap_or(DEFAULT_PORT);
        let window_capacity = parse_env::<usize>(ENV_WINDOW_SIZE)
            .unwrap_or(DEFAULT_WINDOW_SIZE)
            .max(1);
        let upstream_base_url = std::env::var(ENV_UPSTREAM_BASE_URL)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string());
        let timeout_ms =
            parse_env(ENV_UPSTREAM_TIMEOUT_MS).unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_MS);

        Self {
            port,
            window_capacity,
            upstream_base_url,
            upstream_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}
