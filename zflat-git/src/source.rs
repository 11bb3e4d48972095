//! Source identity capture.
//!
//! Must run before any branch switch: once the publisher moves the working
//! tree onto the flat branch, HEAD no longer names the source revision.

use serde::Serialize;

use crate::runner::{CommandRunner, ProcessError};

/// Short revision id and first-line commit message of the source branch,
/// captured once and immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceIdentity {
    pub short_sha: String,
    pub subject: String,
}

impl SourceIdentity {
    /// Read the current HEAD's short sha and subject line.
    pub fn capture(runner: &impl CommandRunner) -> Result<Self, ProcessError> {
        let short_sha = runner.run("git", &["rev-parse", "--short", "HEAD"])?;
        let subject = runner.run("git", &["log", "-1", "--format=%s"])?;
        tracing::info!("Source: {short_sha} - {subject}");
        Ok(SourceIdentity { short_sha, subject })
    }

    /// Commit message used on the flat branch: `Flatten <short>: <subject>`.
    pub fn commit_message(&self) -> String {
        format!("Flatten {}: {}", self.short_sha, self.subject)
    }
}
