//! # zflat-core
//!
//! Pure text transforms for the flatten pipeline.
//!
//! Call [`flatten::flatten`] to inline every `lib/*.zsh` source directive of
//! the entry file into a single artifact, and [`readme::build_readme`] to
//! render the flat-branch README. Neither function mutates anything; module
//! lookup goes through the [`modules::ModuleSource`] trait so callers (and
//! tests) decide where module content comes from.

pub mod error;
pub mod flatten;
pub mod layout;
pub mod modules;
pub mod readme;

pub use error::{LayoutError, RenderError};
pub use flatten::{flatten, FlattenOutput};
pub use layout::RepoSlug;
pub use modules::{LibDir, ModuleSource};
pub use readme::build_readme;
