// src/fetch/types.rs
use anyhow::Result;

/// The closed set of upstream number generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Prime,
    Even,
    Random,
    Fibonacci,
}

impl NumberKind {
    /// Parse the one-letter path identifier. Anything outside the closed
    /// set is rejected here, before any I/O happens.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "p" => Some(Self::Prime),
            "e" => Some(Self::Even),
            "r" => Some(Self::Random),
            "f" => Some(Self::Fibonacci),
            _ => None,
        }
    }

    /// Path segment of the upstream endpoint serving this kind.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Prime => "prime",
            Self::Even => "even",
            Self::Random => "rand",
            Self::Fibonacci => "fibo",
        }
    }

    /// Label used in logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Prime => "prime",
            Self::Even => "even",
            Self::Random => "random",
            Self::Fibonacci => "fibonacci",
        }
    }
}

/// One upstream call: a batch of numbers within a bounded time, or one
/// opaque error. No retries, no partial success.
#[async_trait::async_trait]
pub trait NumberSource: Send + Sync {
    async fn fetch(&self, kind: NumberKind) -> Result<Vec<i64>>;
    fn name(&self) -> &'static str;
}
