//! Error types for exporters.

use thiserror::Error;

/// Errors that can occur while rendering a rule set.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("timestamp format error: {0}")]
    Time(#[from] time::error::Format),
}
