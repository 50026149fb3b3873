// src/cli/handlers.rs
use crate::cli::args::ScoreArgs;
use crate::config::{Config, CONFIG_FILE};
use crate::discovery;
use crate::error::QscoreError;
use crate::exit::QscoreExit;
use crate::phases::Scorer;
use crate::project::{self, ProjectType};
use crate::reporting::{self, OutputMode};
use crate::verification::ShellRunner;
use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Handles a scoring run.
///
/// # Errors
/// Returns error if the config file is invalid or the report cannot be rendered.
pub fn handle_score(args: &ScoreArgs) -> Result<QscoreExit> {
    let root = args
        .root
        .clone()
        .unwrap_or_else(|| project::find_root(&current_dir()));
    info!(root = %root.display(), "scoring project");

    let mut config = Config::load(&root)?;
    if let Some(secs) = args.timeout {
        config.preferences.timeout_secs = secs;
    }

    let runner = ShellRunner::new(&root, Duration::from_secs(config.preferences.timeout_secs));
    let result = Scorer::new(&runner, &config.commands)
        .run(|| discovery::discover(&root, &config.discovery, &args.targets));
    info!(score = result.score(), gate = %result.gate(), "scoring finished");

    let mode = OutputMode::from_flags(args.json, args.summary, args.verbose);
    reporting::print_report(&result, mode)?;

    Ok(QscoreExit::for_result(&result))
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the config already exists (without `force`) or cannot be written.
pub fn handle_init(force: bool) -> Result<QscoreExit> {
    let path = write_starter_config(&current_dir(), force)?;
    println!("{} {}", "Wrote".green().bold(), path.display());
    Ok(QscoreExit::CommitReady)
}

/// Writes a starter config into `dir`, returning its path.
///
/// # Errors
/// Returns error if the file exists and `force` is off, or the write fails.
pub fn write_starter_config(dir: &Path, force: bool) -> crate::error::Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        return Err(QscoreError::AlreadyExists(path));
    }
    let project = ProjectType::detect_in(dir);
    info!(?project, "detected project type");
    fs::write(&path, project::generate_toml(project)).map_err(|e| QscoreError::io(e, &path))?;
    Ok(path)
}
