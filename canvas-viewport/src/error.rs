//! Error types for viewport and page operations.

use thiserror::Error;

/// Result type for viewport operations.
pub type ViewportResult<T> = Result<T, ViewportError>;

/// Errors that can occur in viewport operations.
///
/// Zoom and pan requests never fail; they clamp. These variants cover
/// snapshot handling, configuration, and page editing.
#[derive(Debug, Error)]
pub enum ViewportError {
    /// Snapshot serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration rejected by validation.
    #[error("Invalid viewport configuration: {0}")]
    InvalidConfig(String),

    /// A page with this id is already registered.
    #[error("Duplicate page id: {0}")]
    DuplicatePage(String),

    /// Page not found in the registry.
    #[error("Page not found: {0}")]
    PageNotFound(String),
}
