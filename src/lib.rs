pub mod checks;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod heuristics;
pub mod phases;
pub mod project;
pub mod reporting;
pub mod text;
pub mod types;
pub mod verification;
