use clap::Parser;
use colored::Colorize;
use qscore_core::cli::{self, Cli};
use qscore_core::exit::QscoreExit;

fn main() -> QscoreExit {
    let cli = Cli::parse();
    cli::init_logging(cli.score.verbose);

    match cli::dispatch::execute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            QscoreExit::Error
        }
    }
}
