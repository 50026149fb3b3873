// src/project.rs
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;

/// Files whose presence marks a project root.
pub const ROOT_MARKERS: [&str; 3] = [CONFIG_FILE, "CLAUDE.md", "Makefile"];

/// Walks upward from `start` to the first directory holding a root marker.
/// Falls back to `start` when no ancestor has one.
#[must_use]
pub fn find_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|m| dir.join(m).is_file()))
        .unwrap_or(start)
        .to_path_buf()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectType {
    Rust,
    Node,
    Python,
    Go,
    Unknown,
}

impl ProjectType {
    /// Detects project type in a specific directory.
    #[must_use]
    pub fn detect_in(root: &Path) -> Self {
        if root.join("Cargo.toml").exists() {
            return Self::Rust;
        }
        if root.join("package.json").exists() {
            return Self::Node;
        }
        if root.join("pyproject.toml").exists()
            || root.join("requirements.txt").exists()
            || root.join("Pipfile").exists()
        {
            return Self::Python;
        }
        if root.join("go.mod").exists() {
            return Self::Go;
        }
        Self::Unknown
    }
}

/// Starter `qscore.toml` for a project type.
#[must_use]
pub fn generate_toml(project: ProjectType) -> String {
    let commands = commands_section(project);
    format!(
        "# qscore.toml\n{commands}\n\n[preferences]\ntimeout_secs = {}\n",
        crate::config::DEFAULT_TIMEOUT_SECS
    )
}

fn commands_section(project: ProjectType) -> String {
    match project {
        ProjectType::Rust => rust_commands(),
        ProjectType::Node => node_commands(),
        ProjectType::Python => python_commands(),
        ProjectType::Go => go_commands(),
        ProjectType::Unknown => make_commands(),
    }
}

fn rust_commands() -> String {
    r#"[commands]
build = "cargo build --all-targets 2>&1"
test = "cargo test 2>&1"
lint = ["cargo fmt --check 2>&1", "cargo clippy --all-targets -- -D warnings 2>&1"]
typecheck = "cargo check 2>&1""#
        .to_string()
}

fn node_commands() -> String {
    let npm = npm_cmd();
    format!(
        r#"[commands]
build = "{npm} run build 2>&1"
test = "{npm} test 2>&1"
lint = "{npm} run lint 2>&1"
typecheck = "{npm} run typecheck 2>&1""#
    )
}

fn python_commands() -> String {
    r#"[commands]
build = "python -m compileall -q . 2>&1"
test = "pytest -q 2>&1"
lint = "ruff check . 2>&1"
typecheck = "mypy . 2>&1""#
        .to_string()
}

fn go_commands() -> String {
    r#"[commands]
build = "go build ./... 2>&1"
test = "go test ./... 2>&1"
lint = "go vet ./... 2>&1"
typecheck = "go vet ./... 2>&1""#
        .to_string()
}

fn make_commands() -> String {
    r#"# No project type detected; these are the built-in defaults.
[commands]
build = "make build 2>&1"
test = "make test 2>&1"
lint = "make lint 2>&1"
typecheck = "make typecheck 2>&1""#
        .to_string()
}

#[must_use]
pub fn npm_cmd() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}
