//! Error types for zflat-git.

use std::path::PathBuf;

use thiserror::Error;

use crate::runner::ProcessError;

/// All errors that can arise from publishing to the flat branch.
#[derive(Debug, Error)]
pub enum PublishError {
    /// A git invocation failed at a call site with no fallback.
    #[error("git command failed: {0}")]
    Process(#[from] ProcessError),

    /// An I/O error while materializing the output files, with annotated
    /// path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`PublishError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PublishError {
    PublishError::Io {
        path: path.into(),
        source,
    }
}
