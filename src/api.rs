use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use metrics::{counter, gauge};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::average::{average, format_average};
use crate::error::ServiceError;
use crate::fetch::{NumberKind, NumberSource};
use crate::metrics::Metrics;
use crate::window::NumberWindow;

/// Shared state injected into every handler: the window monitor and the
/// upstream seam. Tests swap `source` for a stub.
#[derive(Clone)]
pub struct AppState {
    pub window: Arc<NumberWindow>,
    pub source: Arc<dyn NumberSource>,
}

pub fn router(state: AppState) -> Router {
    let metrics = Metrics::init(state.window.capacity());

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/numbers/{id}", post(post_numbers))
        .with_state(state)
        .merge(metrics.router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct NumbersResponse {
    window_prev_state: Vec<i64>,
    window_curr_state: Vec<i64>,
    /// Raw fetched batch, echoed as-is.
    numbers: Vec<i64>,
    /// Mean of the whole new window, two decimals; `"NaN"` when empty.
    avg: String,
}

/// `POST /numbers/{id}`: resolve the generator, fetch one batch, merge it
/// into the window, answer with the before/after state and the average.
///
/// The fetch completes before the merge is invoked, so the window lock is
/// never held across the network round-trip.
async fn post_numbers(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NumbersResponse>, ServiceError> {
    counter!("numbers_requests_total").increment(1);

    let kind =
        NumberKind::from_id(&id).ok_or_else(|| ServiceError::invalid_identifier(id.as_str()))?;

    let batch = state
        .source
        .fetch(kind)
        .await
        .map_err(ServiceError::Upstream)?;

    let outcome = state.window.merge(&batch);
    let avg = format_average(average(&outcome.window));

    counter!("window_merge_total").increment(1);
    if outcome.evicted > 0 {
        counter!("window_evicted_total").increment(outcome.evicted as u64);
    }
    gauge!("window_len").set(outcome.window.len() as f64);

    tracing::info!(
        target: "window",
        kind = kind.label(),
        source = state.source.name(),
        fetched = batch.len(),
        added = outcome.added,
        evicted = outcome.evicted,
        len = outcome.window.len(),
        "merged batch"
    );

    Ok(Json(NumbersResponse {
        window_prev_state: outcome.previous,
        window_curr_state: outcome.current,
        numbers: batch,
        avg,
    }))
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match &self {
            ServiceError::InvalidIdentifier { id } => {
                counter!("numbers_invalid_id_total").increment(1);
                tracing::warn!(target: "api", %id, "rejected unknown number id");
            }
            ServiceError::Upstream(err) => {
                counter!("upstream_fetch_errors_total").increment(1);
                tracing::warn!(target: "api", error = ?err, "upstream fetch failed");
            }
            ServiceError::Internal(err) => {
                counter!("internal_errors_total").increment(1);
                tracing::error!(target: "api", error = ?err, "internal error");
            }
        }
        counter!("numbers_request_errors_total").increment(1);

        // Every kind collapses to the same external shape.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Internal server error" })),
        )
            .into_response()
    }
}
