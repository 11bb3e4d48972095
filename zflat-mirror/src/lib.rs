//! # zflat-mirror
//!
//! Gist mirror of the flattened artifact.
//!
//! The mirror is stateless: every run is a full overwrite of the remote file
//! slot's description and content, with no diff check and no versioning.
//! [`GistClient`] implements the [`Mirror`] trait against the GitHub gist
//! API; tests use recording fakes.

pub mod credentials;
pub mod error;
pub mod gist;

pub use credentials::MirrorCredentials;
pub use error::{CredentialError, MirrorError};
pub use gist::{GistClient, Mirror};
