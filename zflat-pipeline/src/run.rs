//! Pipeline entrypoint.
//!
//! Ordering guarantees, in sequence: source identity is captured before any
//! branch mutation; artifact and README intermediates are written before the
//! publisher stages them; credentials are checked after publish and before
//! any mirror call, so a missing credential never leaves partial external
//! state beyond what the publisher already committed.

use std::path::Path;

use serde::Serialize;

use zflat_core::flatten::flatten;
use zflat_core::layout::{self, RepoSlug};
use zflat_core::modules::LibDir;
use zflat_core::readme::build_readme;
use zflat_git::publisher::{BranchPublisher, PublishOutcome};
use zflat_git::runner::CommandRunner;
use zflat_git::source::SourceIdentity;
use zflat_mirror::credentials::MirrorCredentials;
use zflat_mirror::error::CredentialError;
use zflat_mirror::gist::Mirror;

use crate::error::{io_err, PipelineError};

/// What a pipeline run did, for the CLI to print (or emit as JSON).
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub source: SourceIdentity,
    pub line_count: usize,
    pub missing_modules: Vec<String>,
    pub publish: PublishOutcome,
    pub mirror_gist: String,
}

/// Run the whole pipeline against `workdir`.
///
/// `credentials` is passed pre-resolved so the caller decides where they come
/// from; a resolution failure only aborts the run once the mirror step is
/// reached, matching the publish-then-mirror ordering.
pub fn run<R: CommandRunner, M: Mirror>(
    workdir: &Path,
    repo: &RepoSlug,
    runner: &R,
    mirror: &M,
    credentials: Result<MirrorCredentials, CredentialError>,
) -> Result<RunSummary, PipelineError> {
    // Capture before any branch switch changes what HEAD means.
    let source = SourceIdentity::capture(runner)?;

    let entry_path = workdir.join(layout::ENTRY_FILE);
    let entry = std::fs::read_to_string(&entry_path).map_err(|e| io_err(&entry_path, e))?;
    let modules = LibDir::new(workdir.join(layout::LIB_DIR));
    let flat = flatten(&entry, &repo.url(), &modules);
    let readme = build_readme(repo, &source.short_sha)?;

    write_staging(workdir, layout::ARTIFACT_FILE, &flat.text)?;
    write_staging(workdir, layout::README_FILE, &readme)?;
    tracing::debug!("staged intermediates in {}", workdir.display());

    let publish = BranchPublisher::new(workdir, runner).publish(&source)?;

    let credentials = credentials?;
    let description = format!(
        "TrueNAS CORE ZSH config (flat build from {})",
        source.short_sha
    );
    mirror.update(&credentials, &description, layout::ARTIFACT_FILE, &flat.text)?;

    Ok(RunSummary {
        source,
        line_count: flat.line_count,
        missing_modules: flat.missing,
        publish,
        mirror_gist: credentials.gist_id,
    })
}

fn write_staging(workdir: &Path, final_name: &str, content: &str) -> Result<(), PipelineError> {
    let path = workdir.join(layout::staging_name(final_name));
    std::fs::write(&path, content).map_err(|e| io_err(&path, e))
}
