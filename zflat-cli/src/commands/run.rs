//! `zflat run` - the one-shot CI pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use zflat_git::{PublishOutcome, SystemRunner};
use zflat_mirror::{GistClient, MirrorCredentials};
use zflat_pipeline::RunSummary;

/// Arguments for `zflat run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Source repository as owner/repo (defaults to $GITHUB_REPOSITORY).
    #[arg(long)]
    pub repo: Option<String>,

    /// Working directory containing the source checkout.
    #[arg(long, default_value = ".")]
    pub repo_dir: PathBuf,

    /// Emit the run summary as JSON instead of the human summary.
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let repo = super::resolve_repo(self.repo.as_deref())?;
        let runner = SystemRunner::new(&self.repo_dir);
        let mirror = GistClient::new();

        let summary = zflat_pipeline::run(
            &self.repo_dir,
            &repo,
            &runner,
            &mirror,
            MirrorCredentials::from_env(),
        )
        .with_context(|| format!("flatten pipeline failed for {repo}"))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_summary(&summary);
        }
        Ok(())
    }
}

fn print_summary(summary: &RunSummary) {
    println!(
        "✓ flattened {} lines from {} ({})",
        summary.line_count, summary.source.short_sha, summary.source.subject
    );
    for name in &summary.missing_modules {
        println!("  !  lib/{name} missing, directive kept");
    }
    match summary.publish {
        PublishOutcome::Published => println!("  ✎  flat branch updated"),
        PublishOutcome::Unchanged => println!("  ·  flat branch unchanged"),
    }
    println!("  ↻  gist {} overwritten", summary.mirror_gist);
}
