//! Orphan-branch publisher.
//!
//! ## Publish state machine
//!
//! 1. Set committer identity (idempotent, before any possible commit).
//! 2. Fetch `origin flat:flat`; a missing remote branch is expected on the
//!    first run and swallowed.
//! 3. Checkout `flat`; if the local branch does not exist, create it as an
//!    orphan and clear the tracked tree (the clear may itself fail on a
//!    brand-new empty repository, also swallowed).
//! 4. Rename the staged `*.flat` intermediates into place and `git add` them.
//! 5. Quiet cached diff restricted to the two paths: clean → no-op; dirty →
//!    commit `Flatten <short>: <subject>` and push.
//!
//! Every swallowed call goes through [`BranchPublisher::run_soft`] so the
//! expected-vs-fatal split is explicit per call site. Any failure from step 4
//! on propagates and aborts the run.

use std::path::PathBuf;

use serde::Serialize;

use zflat_core::layout::{self, ARTIFACT_FILE, FLAT_BRANCH, README_FILE};

use crate::error::{io_err, PublishError};
use crate::runner::CommandRunner;
use crate::source::SourceIdentity;

const GIT_USER_NAME: &str = "github-actions[bot]";
const GIT_USER_EMAIL: &str = "41898282+github-actions[bot]@users.noreply.github.com";

/// Outcome of a publish attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishOutcome {
    /// The staged tree differed from the branch head; committed and pushed.
    Published,
    /// The staged tree matched the branch head; no commit, no push.
    Unchanged,
}

/// Publishes the flattened artifact and README to the orphan flat branch.
pub struct BranchPublisher<'r, R: CommandRunner> {
    workdir: PathBuf,
    runner: &'r R,
}

impl<'r, R: CommandRunner> BranchPublisher<'r, R> {
    pub fn new(workdir: impl Into<PathBuf>, runner: &'r R) -> Self {
        BranchPublisher {
            workdir: workdir.into(),
            runner,
        }
    }

    /// Run the publish state machine. Expects the staged intermediates
    /// (`truenas.zsh.flat`, `README.md.flat`) to exist in the working tree.
    pub fn publish(&self, source: &SourceIdentity) -> Result<PublishOutcome, PublishError> {
        self.configure_identity()?;

        let refspec = format!("{FLAT_BRANCH}:{FLAT_BRANCH}");
        self.run_soft("fetch flat branch", &["fetch", "origin", &refspec]);

        if self
            .run_soft("checkout flat branch", &["checkout", FLAT_BRANCH])
            .is_none()
        {
            self.git(&["checkout", "--orphan", FLAT_BRANCH])?;
            self.run_soft("clear initial tree", &["rm", "-rf", "."]);
        }

        self.materialize()?;
        self.git(&["add", ARTIFACT_FILE, README_FILE])?;

        match self.runner.run(
            "git",
            &["diff", "--cached", "--quiet", "--", ARTIFACT_FILE, README_FILE],
        ) {
            Ok(_) => {
                tracing::info!("No changes to {FLAT_BRANCH} branch");
                Ok(PublishOutcome::Unchanged)
            }
            Err(err) if err.exit_code() == Some(1) => {
                self.git(&["commit", "-m", &source.commit_message()])?;
                self.git(&["push", "origin", FLAT_BRANCH])?;
                tracing::info!("Deployed to {FLAT_BRANCH} branch: {}", source.short_sha);
                Ok(PublishOutcome::Published)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Set commit author name/email. Idempotent; failure is fatal.
    fn configure_identity(&self) -> Result<(), PublishError> {
        self.git(&["config", "user.name", GIT_USER_NAME])?;
        self.git(&["config", "user.email", GIT_USER_EMAIL])?;
        Ok(())
    }

    /// Move the staged intermediates onto their final names in the working
    /// tree. The intermediates are untracked, so they survived the checkout.
    fn materialize(&self) -> Result<(), PublishError> {
        for name in [ARTIFACT_FILE, README_FILE] {
            let staged = self.workdir.join(layout::staging_name(name));
            let target = self.workdir.join(name);
            std::fs::rename(&staged, &target).map_err(|e| io_err(&staged, e))?;
        }
        Ok(())
    }

    /// Fatal git invocation: any failure propagates.
    fn git(&self, args: &[&str]) -> Result<String, PublishError> {
        Ok(self.runner.run("git", args)?)
    }

    /// Expected-possible git invocation: failure is logged and swallowed.
    fn run_soft(&self, what: &str, args: &[&str]) -> Option<String> {
        match self.runner.run("git", args) {
            Ok(out) => Some(out),
            Err(err) => {
                tracing::debug!("{what} failed (expected-possible): {err}");
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
