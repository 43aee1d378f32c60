use thiserror::Error;

/// Unified error type for the request path.
///
/// Externally every kind collapses to the same `500` response (see
/// `api`); the distinction exists for logs and metrics only.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The path identifier is outside the closed `p`/`e`/`r`/`f` set.
    /// Raised before any outbound fetch or window access.
    #[error("unknown number id: {id}")]
    InvalidIdentifier {
        /// The identifier as it arrived in the path.
        id: String,
    },

    /// The upstream generator was unreachable, answered non-2xx, or
    /// returned a payload that does not decode to `{"numbers": [...]}`.
    /// The request aborts with no window mutation.
    #[error("upstream fetch failed: {0}")]
    Upstream(anyhow::Error),

    /// Any other unexpected failure.
    #[error("internal error: {0}")]
    Internal(anyhow::Error),
}

impl ServiceError {
    /// Helper: build an `InvalidIdentifier` from whatever arrived in the
    /// path.
    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        Self::InvalidIdentifier { id: id.into() }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}
