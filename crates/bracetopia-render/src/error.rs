//! Error types for bracetopia-render.

use thiserror::Error;

/// Errors that can occur while drawing a frame or pausing between frames.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, RenderError>`.
pub type RenderResult<T> = Result<T, RenderError>;
