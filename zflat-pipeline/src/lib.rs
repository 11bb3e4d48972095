//! # zflat-pipeline
//!
//! Orchestrator for the flatten job: capture source identity, flatten the
//! entry file, render the README, publish to the orphan branch, then mirror
//! the artifact to the gist. Strictly sequential, no retries; the only
//! entrypoint is [`run`].

pub mod error;
pub mod run;

pub use error::PipelineError;
pub use run::{run, RunSummary};
