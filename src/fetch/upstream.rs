use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::histogram;
use serde::Deserialize;

use crate::fetch::types::{NumberKind, NumberSource};

/// Wire shape shared by all four generator endpoints.
#[derive(Debug, Deserialize)]
struct NumbersPayload {
    numbers: Vec<i64>,
}

/// HTTP client for the third-party number generators.
pub struct UpstreamClient {
    base_url: String,
    client: reqwest::Client,
}

impl UpstreamClient {
    /// Build a client against `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building upstream http client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url_for(&self, kind: NumberKind) -> String {
        format!("{}/{}", self.base_url, kind.endpoint())
    }
}

#[async_trait]
impl NumberSource for UpstreamClient {
    async fn fetch(&self, kind: NumberKind) -> Result<Vec<i64>> {
        let url = self.url_for(kind);
        let t0 = std::time::Instant::now();

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .context("upstream non-2xx")?;

        let payload: NumbersPayload = resp
            .json()
            .await
            .context("decoding upstream numbers payload")?;

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("upstream_fetch_ms").record(ms);

        tracing::debug!(
            target: "upstream",
            kind = kind.label(),
            count = payload.numbers.len(),
            "fetched batch"
        );
        Ok(payload.numbers)
    }

    fn name(&self) -> &'static str {
        "upstream"
    }
}
