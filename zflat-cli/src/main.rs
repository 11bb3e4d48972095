//! zflat - flatten a modular zsh startup config and publish the result.
//!
//! # Usage
//!
//! ```text
//! zflat run [--repo owner/repo] [--repo-dir DIR] [--json]
//! zflat flatten [--repo owner/repo] [--repo-dir DIR] [--output FILE]
//! ```
//!
//! `run` is the CI entrypoint: flatten `truenas.zsh`, publish to the orphan
//! `flat` branch, overwrite the gist mirror. `flatten` is a local preview
//! with no side effects beyond the optional output file.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{flatten::FlattenArgs, run::RunArgs};

#[derive(Parser, Debug)]
#[command(
    name = "zflat",
    version,
    about = "Flatten truenas.zsh and publish it to the flat branch and gist mirror",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full pipeline: flatten, publish, mirror.
    Run(RunArgs),

    /// Flatten locally and print (or write) the artifact. No git, no mirror.
    Flatten(FlattenArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => args.run(),
        Commands::Flatten(args) => args.run(),
    }
}
