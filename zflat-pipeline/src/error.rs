//! Error types for zflat-pipeline.

use std::path::PathBuf;

use thiserror::Error;

use zflat_core::error::RenderError;
use zflat_git::error::PublishError;
use zflat_git::runner::ProcessError;
use zflat_mirror::error::{CredentialError, MirrorError};

/// All fatal errors that can abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source identity could not be captured.
    #[error("source identity capture failed: {0}")]
    Source(#[from] ProcessError),

    /// An I/O error reading the entry or writing intermediates, with
    /// annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// README rendering failed.
    #[error("readme render failed: {0}")]
    Render(#[from] RenderError),

    /// Branch publish failed past an expected-possible step.
    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),

    /// A required mirror credential is absent.
    #[error("mirror configuration error: {0}")]
    Credentials(#[from] CredentialError),

    /// The mirror update failed.
    #[error("mirror sync failed: {0}")]
    Mirror(#[from] MirrorError),
}

/// Convenience constructor for [`PipelineError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PipelineError {
    PipelineError::Io {
        path: path.into(),
        source,
    }
}
