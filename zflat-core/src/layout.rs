//! Fixed names and URL derivation for the flatten job.
//!
//! The entry file, library directory, publish branch and output filenames are
//! all fixed by the job contract; everything that needs one of these names
//! takes it from here rather than repeating the literal.

use std::fmt;

use crate::error::LayoutError;

/// Entry document at the repository root.
pub const ENTRY_FILE: &str = "truenas.zsh";

/// Directory holding the inlinable modules.
pub const LIB_DIR: &str = "lib";

/// Orphan branch the artifact is published to.
pub const FLAT_BRANCH: &str = "flat";

/// Flattened artifact filename on the publish branch (same name as the entry).
pub const ARTIFACT_FILE: &str = "truenas.zsh";

/// Generated README filename on the publish branch.
pub const README_FILE: &str = "README.md";

/// Suffix for intermediate files staged in the working tree before the
/// branch switch. Untracked, so they survive the checkout.
pub const STAGING_SUFFIX: &str = ".flat";

/// Staging name for a final output filename, e.g. `truenas.zsh.flat`.
pub fn staging_name(final_name: &str) -> String {
    format!("{final_name}{STAGING_SUFFIX}")
}

/// Raw-content URL of the published artifact for a given repository URL.
///
/// Substitutes the raw-content host for the repository host and appends the
/// branch and artifact path.
pub fn raw_artifact_url(repo_url: &str) -> String {
    let raw = repo_url.replacen("https://github.com/", "https://raw.githubusercontent.com/", 1);
    format!("{raw}/{FLAT_BRANCH}/{ARTIFACT_FILE}")
}

// ---------------------------------------------------------------------------
// RepoSlug
// ---------------------------------------------------------------------------

/// An `owner/repo` pair identifying the source repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    /// Parse an `owner/repo` slug (the `GITHUB_REPOSITORY` format).
    pub fn parse(value: &str) -> Result<Self, LayoutError> {
        let invalid = || LayoutError::InvalidRepoSlug {
            value: value.to_string(),
        };
        let (owner, repo) = value.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(invalid());
        }
        Ok(RepoSlug {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Repository URL on the hosting service.
    pub fn url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
