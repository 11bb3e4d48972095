//! `zflat flatten` - local preview of the artifact.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use zflat_core::flatten::flatten;
use zflat_core::layout;
use zflat_core::modules::LibDir;

/// Arguments for `zflat flatten`.
#[derive(Args, Debug)]
pub struct FlattenArgs {
    /// Source repository as owner/repo (defaults to $GITHUB_REPOSITORY).
    #[arg(long)]
    pub repo: Option<String>,

    /// Directory containing the entry file and lib/ modules.
    #[arg(long, default_value = ".")]
    pub repo_dir: PathBuf,

    /// Write the artifact here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl FlattenArgs {
    pub fn run(self) -> Result<()> {
        let repo = super::resolve_repo(self.repo.as_deref())?;

        let entry_path = self.repo_dir.join(layout::ENTRY_FILE);
        let entry = std::fs::read_to_string(&entry_path)
            .with_context(|| format!("failed to read {}", entry_path.display()))?;
        let modules = LibDir::new(self.repo_dir.join(layout::LIB_DIR));

        let flat = flatten(&entry, &repo.url(), &modules);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &flat.text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("✓ wrote {} lines to {}", flat.line_count, path.display());
            }
            None => print!("{}", flat.text),
        }
        Ok(())
    }
}
