//! Flat-branch README renderer.
//!
//! One embedded tera template, parameterized by repository URL, owner, repo
//! name and the short source revision. Pure template fill; no branching.

use tera::Tera;

use crate::error::RenderError;
use crate::layout::RepoSlug;

const README_TEMPLATE: &str = include_str!("templates/readme.md.tera");
const README_TEMPLATE_NAME: &str = "readme.md";

/// Render the README published next to the artifact on the flat branch.
pub fn build_readme(slug: &RepoSlug, short_sha: &str) -> Result<String, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_template(README_TEMPLATE_NAME, README_TEMPLATE)?;

    let mut ctx = tera::Context::new();
    ctx.insert("repo_url", &slug.url());
    ctx.insert("owner", &slug.owner);
    ctx.insert("repo", &slug.repo);
    ctx.insert("short_sha", short_sha);

    Ok(tera.render(README_TEMPLATE_NAME, &ctx)?)
}
