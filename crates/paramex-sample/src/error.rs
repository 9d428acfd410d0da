use paramex::{BindError, ExtractError};
use thiserror::Error;

/// Failures of the sample application.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("bind failed: {0}")]
    Bind(#[from] BindError),

    #[error("form extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("invalid request: {0}")]
    Request(#[from] http::Error),
}
