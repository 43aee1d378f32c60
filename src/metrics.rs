use axum::{routing::get, Router};
use metrics::{describe_counter, describe_gauge, describe_histogram, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

// The recorder is process-global; keep the handle so repeated inits
// (tests build many routers) reuse it instead of failing a second install.
static RECORDER: OnceCell<PrometheusHandle> = OnceCell::new();

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder (once per process) and publish the
    /// static window-capacity gauge.
    pub fn init(window_capacity: usize) -> Self {
        let handle = RECORDER
            .get_or_init(|| {
                PrometheusBuilder::new()
                    .install_recorder()
                    .expect("prometheus: install recorder")
            })
            .clone();

        describe_series();
        gauge!("window_capacity").set(window_capacity as f64);

        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One-time metrics registration (so series show up on /metrics).
fn describe_series() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("numbers_requests_total", "Requests to POST /numbers.");
        describe_counter!(
            "numbers_request_errors_total",
            "Requests that ended in the collapsed 500."
        );
        describe_counter!(
            "numbers_invalid_id_total",
            "Requests rejected for an unknown identifier."
        );
        describe_counter!(
            "upstream_fetch_errors_total",
            "Upstream fetch failures (network, non-2xx, decode)."
        );
        describe_counter!(
            "internal_errors_total",
            "Unexpected failures outside the upstream path."
        );
        describe_counter!("window_merge_total", "Merges applied to the window.");
        describe_counter!(
            "window_evicted_total",
            "Values evicted by capacity overflow."
        );
        describe_gauge!("window_len", "Values currently held in the window.");
        describe_gauge!("window_capacity", "Configured window capacity.");
        describe_histogram!("upstream_fetch_ms", "Upstream fetch time in milliseconds.");
    });
}
