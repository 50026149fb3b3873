// src/config/mod.rs
pub mod types;

pub use self::types::{
    CommandEntry, CommandSet, CommandsToml, Config, DiscoveryConfig, Preferences, QscoreToml,
    DEFAULT_TIMEOUT_SECS,
};

use crate::error::{QscoreError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the optional per-project config file.
pub const CONFIG_FILE: &str = "qscore.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `qscore.toml` from `root`, falling back to defaults when absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }
        let content = fs::read_to_string(&path).map_err(|e| QscoreError::io(e, &path))?;
        Self::parse_toml(&content).map_err(|source| QscoreError::Config { source, path })
    }

    /// Parses config text, keeping defaults for every key left out.
    ///
    /// # Errors
    /// Returns the TOML error if the text is not a valid config.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let parsed: QscoreToml = toml::from_str(content)?;
        Ok(Self::from_toml(parsed))
    }

    fn from_toml(parsed: QscoreToml) -> Self {
        let mut commands = CommandSet::default();
        let CommandsToml {
            build,
            test,
            lint,
            typecheck,
        } = parsed.commands;
        override_command(&mut commands.build, build);
        override_command(&mut commands.test, test);
        override_command(&mut commands.lint, lint);
        override_command(&mut commands.typecheck, typecheck);

        Self {
            commands,
            preferences: parsed.preferences,
            discovery: parsed.discovery,
        }
    }
}

fn override_command(slot: &mut String, entry: Option<CommandEntry>) {
    if let Some(entry) = entry {
        *slot = entry.into_shell();
    }
}
