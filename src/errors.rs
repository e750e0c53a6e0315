//! Error types for product list rendering
//!
//! A missing container is the only failure the renderer itself can produce.
//! The remaining variants come from the host document or from the JavaScript
//! boundary.

use thiserror::Error;

/// Top-level rendering error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No element with the requested id exists in the host document
    #[error("Container not found: #{0}")]
    ContainerNotFound(String),

    /// The host document rejected a DOM operation
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Products or configuration could not be deserialized
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
