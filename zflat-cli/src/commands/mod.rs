pub mod flatten;
pub mod run;

use anyhow::{Context, Result};

use zflat_core::layout::RepoSlug;

/// Resolve the source repository slug from `--repo` or `GITHUB_REPOSITORY`.
pub(crate) fn resolve_repo(flag: Option<&str>) -> Result<RepoSlug> {
    let value = match flag {
        Some(v) => v.to_string(),
        None => std::env::var("GITHUB_REPOSITORY")
            .context("provide --repo owner/repo or set GITHUB_REPOSITORY")?,
    };
    Ok(RepoSlug::parse(&value)?)
}
