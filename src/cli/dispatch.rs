//! Command dispatch logic extracted from the binary.

use super::args::{Cli, Commands};
use super::handlers::{handle_init, handle_score};
use crate::exit::QscoreExit;
use anyhow::Result;

/// Executes the parsed command line.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: &Cli) -> Result<QscoreExit> {
    match &cli.command {
        Some(Commands::Init { force }) => handle_init(*force),
        None => handle_score(&cli.score),
    }
}
