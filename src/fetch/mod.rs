// src/fetch/mod.rs
pub mod types;
pub mod upstream;

pub use types::{NumberKind, NumberSource};
pub use upstream::UpstreamClient;
