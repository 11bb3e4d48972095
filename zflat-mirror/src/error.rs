//! Error types for zflat-mirror.

use thiserror::Error;

/// A required credential could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// The environment variable is unset or empty.
    #[error("{name} is required")]
    Missing { name: &'static str },
}

/// All errors that can arise from a mirror update.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The API answered with a non-success status.
    #[error("gist API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The request never completed (DNS, TLS, connection).
    #[error("gist transport error: {0}")]
    Transport(String),
}
