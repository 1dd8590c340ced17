//! verita-core: Shared infrastructure for the Verita API client.
pub mod config;
pub mod error;
pub mod observability;
pub mod storage;

pub use reqwest;
pub use serde;
pub use serde_json;
pub use tracing;
