//! Mirror credentials from the environment.
//!
//! Two required values: the gist access token (`GIST_PAT`) and the gist id
//! (`GIST_ID`). Absence of either is a fatal configuration error, raised
//! before any mirror call is attempted.

use crate::error::CredentialError;

pub const TOKEN_VAR: &str = "GIST_PAT";
pub const GIST_ID_VAR: &str = "GIST_ID";

/// Access token and target gist id for the mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorCredentials {
    pub token: String,
    pub gist_id: String,
}

impl MirrorCredentials {
    /// Read both credentials from the process environment.
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read both credentials through a lookup function. Empty values count
    /// as missing.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CredentialError> {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(CredentialError::Missing { name })
        };
        Ok(MirrorCredentials {
            token: require(TOKEN_VAR)?,
            gist_id: require(GIST_ID_VAR)?,
        })
    }
}
