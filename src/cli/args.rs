use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "qscore",
    version,
    about = "Quality Score Calculator: rates your project 0-100",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    #[command(flatten)]
    pub score: ScoreArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter qscore.toml for the detected project type
    Init {
        /// Overwrite an existing qscore.toml
        #[arg(long, short)]
        force: bool,
    },
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Clone, Default)]
pub struct ScoreArgs {
    /// Files, directories or glob patterns to scan (default: whole project)
    pub targets: Vec<String>,
    /// One-line summary output
    #[arg(long)]
    pub summary: bool,
    /// Detailed breakdown and progress logging
    #[arg(long, short)]
    pub verbose: bool,
    /// JSON output
    #[arg(long)]
    pub json: bool,
    /// Per-command timeout in seconds (overrides qscore.toml)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
    /// Project root (default: nearest ancestor with qscore.toml, CLAUDE.md or Makefile)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}
