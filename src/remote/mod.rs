//! Optional remote collaborators: the Carbon Interface estimation API
//! and the OpenAI recommendation generator.
//!
//! Both are best-effort: one attempt per call, no retry, and any
//! failure falls back to the offline engine in `crate::engine`.

mod carbon;
mod models;
mod recommend;
mod routes;

pub use carbon::CarbonClient;
pub use recommend::RecommendClient;
pub use routes::router;

use thiserror::Error;

/// Failure from a remote collaborator. Always recoverable: the caller
/// substitutes the offline computation for the failed call.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("API key not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("response missing expected fields")]
    MissingFields,
}
