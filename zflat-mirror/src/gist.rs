//! Gist client: one operation, update a named remote file resource.

use serde_json::{json, Value};

use crate::credentials::MirrorCredentials;
use crate::error::MirrorError;

const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = "zflat";

/// Remote-API capability consumed by the pipeline: overwrite one remote
/// file slot's description and content.
pub trait Mirror {
    fn update(
        &self,
        credentials: &MirrorCredentials,
        description: &str,
        filename: &str,
        content: &str,
    ) -> Result<(), MirrorError>;
}

/// PATCH payload for the gist update.
pub fn update_payload(description: &str, filename: &str, content: &str) -> Value {
    json!({
        "description": description,
        "files": { filename: { "content": content } },
    })
}

// ---------------------------------------------------------------------------
// GistClient
// ---------------------------------------------------------------------------

/// [`Mirror`] backed by the GitHub gist REST API.
#[derive(Debug, Clone)]
pub struct GistClient {
    agent: ureq::Agent,
    api_base: String,
}

impl GistClient {
    pub fn new() -> Self {
        GistClient {
            agent: ureq::Agent::new(),
            api_base: API_BASE.to_string(),
        }
    }

    /// Client against a non-default API base, for tests.
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        GistClient {
            agent: ureq::Agent::new(),
            api_base: api_base.into(),
        }
    }
}

impl Default for GistClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Mirror for GistClient {
    fn update(
        &self,
        credentials: &MirrorCredentials,
        description: &str,
        filename: &str,
        content: &str,
    ) -> Result<(), MirrorError> {
        let url = format!("{}/gists/{}", self.api_base, credentials.gist_id);
        let response = self
            .agent
            .request("PATCH", &url)
            .set("Authorization", &format!("Bearer {}", credentials.token))
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", USER_AGENT)
            .send_json(update_payload(description, filename, content));

        match response {
            Ok(_) => {
                tracing::info!("Gist {} updated", credentials.gist_id);
                Ok(())
            }
            Err(ureq::Error::Status(status, response)) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "<unreadable response body>".to_string());
                Err(MirrorError::Api { status, message })
            }
            Err(err) => Err(MirrorError::Transport(err.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
