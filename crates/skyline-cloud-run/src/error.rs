//! Cloud Run listing error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudRunError {
    #[error("gcloud command failed: {0}")]
    Command(#[from] skyline_core::RunError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CloudRunError>;
