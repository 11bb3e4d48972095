//! # zflat-git
//!
//! Git side of the flatten pipeline: a narrow process-execution capability,
//! source-identity capture, and the orphan-branch publisher.
//!
//! All external processes go through [`CommandRunner`]; production code uses
//! [`SystemRunner`], tests inject scripted fakes. [`BranchPublisher`] commits
//! and pushes the artifact only when the staged tree actually changed.

pub mod error;
pub mod publisher;
pub mod runner;
pub mod source;

pub use error::PublishError;
pub use publisher::{BranchPublisher, PublishOutcome};
pub use runner::{CommandRunner, ProcessError, SystemRunner};
pub use source::SourceIdentity;
