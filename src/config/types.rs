use serde::{Deserialize, Serialize};

use crate::phases::Phase;

/// Default subprocess timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// A command given either as one shell string or a list run in sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandEntry {
    Single(String),
    List(Vec<String>),
}

impl CommandEntry {
    /// Collapses the entry into one shell line; list items are chained with
    /// `&&` so the first failure stops the chain.
    #[must_use]
    pub fn into_shell(self) -> String {
        match self {
            Self::Single(s) => s,
            Self::List(l) => l
                .into_iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>()
                .join(" && "),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandsToml {
    pub build: Option<CommandEntry>,
    pub test: Option<CommandEntry>,
    pub lint: Option<CommandEntry>,
    pub typecheck: Option<CommandEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directories under the project root scanned when no targets are given.
    #[serde(default = "default_source_dirs")]
    pub source_dirs: Vec<String>,
    /// Recognized source extensions, with the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            source_dirs: default_source_dirs(),
            extensions: default_extensions(),
        }
    }
}

fn default_source_dirs() -> Vec<String> {
    ["src", "tests", "lib", "app", "pkg", "internal", "cmd"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_extensions() -> Vec<String> {
    [
        ".py", ".ts", ".tsx", ".js", ".jsx", ".go", ".rs", ".java", ".rb", ".c", ".cpp", ".h",
        ".hpp", ".cs", ".swift", ".kt",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

/// On-disk shape of `qscore.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QscoreToml {
    #[serde(default)]
    pub commands: CommandsToml,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Shell commands for the four command-backed phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSet {
    pub build: String,
    pub test: String,
    pub lint: String,
    pub typecheck: String,
}

impl Default for CommandSet {
    fn default() -> Self {
        Self {
            build: "make build 2>&1".to_string(),
            test: "make test 2>&1".to_string(),
            lint: "make lint 2>&1".to_string(),
            typecheck: "make typecheck 2>&1".to_string(),
        }
    }
}

impl CommandSet {
    /// Command for a phase; `None` for phases that run no command.
    #[must_use]
    pub fn for_phase(&self, phase: Phase) -> Option<&str> {
        match phase {
            Phase::Build => Some(&self.build),
            Phase::Tests => Some(&self.test),
            Phase::Lint => Some(&self.lint),
            Phase::Typecheck => Some(&self.typecheck),
            Phase::Source => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub commands: CommandSet,
    pub preferences: Preferences,
    pub discovery: DiscoveryConfig,
}
