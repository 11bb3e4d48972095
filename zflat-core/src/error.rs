//! Error types for zflat-core.

use thiserror::Error;

/// Errors from layout parsing (repository slug handling).
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The `owner/repo` slug could not be parsed.
    #[error("invalid repository slug '{value}'; expected owner/repo")]
    InvalidRepoSlug { value: String },
}

/// Errors from README rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
