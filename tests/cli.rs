// tests/cli.rs - Exit-code and output contract of the qscore binary
#![cfg(unix)]

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn project(toml: &str, files: &[(&str, &str)]) -> TempDir {
    let d = tempfile::Builder::new().prefix("proj").tempdir().unwrap();
    fs::write(d.path().join("qscore.toml"), toml).unwrap();
    for (rel, body) in files {
        let p = d.path().join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, body).unwrap();
    }
    d
}

fn qscore(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qscore"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

const CLEAN: &str = r#"
[commands]
build = "true"
test = "echo '4 passed'"
lint = "true"
typecheck = "true"
"#;

#[test]
fn clean_project_exits_zero() {
    let d = project(CLEAN, &[("src/main.py", "print('hi')\n")]);
    let out = qscore(d.path(), &["--summary"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out).trim_end(),
        "Quality Score: 100/100 [RELEASE] (0 critical, 0 major, 0 minor)"
    );
}

#[test]
fn build_failure_exits_two_with_single_finding() {
    let toml = CLEAN.replace("build = \"true\"", "build = \"echo boom >&2; exit 1\"");
    let d = project(&toml, &[]);
    let out = qscore(d.path(), &["--json"]);
    assert_eq!(out.status.code(), Some(2));

    let v: Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["score"], 0);
    assert_eq!(v["gate"], "AUTO-FAIL");
    assert_eq!(v["auto_fail_reason"], "Build failed");
    let findings = v["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["category"], "build");
    assert_eq!(findings[0]["message"], "Build failed: boom");
}

#[test]
fn heavy_lint_exits_one() {
    let toml = CLEAN.replace(
        "lint = \"true\"",
        "lint = \"for i in 1 2 3 4 5; do echo \\\"f$i.js: error bad\\\"; done; exit 1\"",
    );
    let d = project(&toml, &[]);
    let out = qscore(d.path(), &["--summary"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("75/100 [BLOCKED]"), "{}", stdout(&out));
}

#[test]
fn secret_exits_two() {
    let d = project(CLEAN, &[("src/config.py", "api_key = \"abc123\"\n")]);
    let out = qscore(d.path(), &["--verbose"]);
    assert_eq!(out.status.code(), Some(2));
    let text = stdout(&out);
    assert!(text.contains("AUTO-FAIL: Hardcoded secrets detected"), "{text}");
    assert!(text.contains("Potential hardcoded API key"));
}

#[test]
fn targets_narrow_the_scan() {
    let d = project(
        CLEAN,
        &[("src/a.py", "# TODO one\n"), ("src/b.py", "# TODO two\n")],
    );
    let out = qscore(d.path(), &["--json", "src/a.py"]);
    let v: Value = serde_json::from_str(&stdout(&out)).unwrap();
    let findings = v["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert!(findings[0]["file"].as_str().unwrap().ends_with("a.py"));
}

#[test]
fn malformed_config_is_a_tool_error() {
    let d = project("[commands\nbuild = ", &[]);
    let out = qscore(d.path(), &[]);
    assert_eq!(out.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&out.stderr).contains("error"));
}

#[test]
fn init_writes_config_once() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("Cargo.toml"), "[package]\nname = \"x\"\n").unwrap();

    let first = qscore(d.path(), &["init"]);
    assert_eq!(first.status.code(), Some(0));
    let written = fs::read_to_string(d.path().join("qscore.toml")).unwrap();
    assert!(written.contains("cargo build"), "{written}");

    let second = qscore(d.path(), &["init"]);
    assert_eq!(second.status.code(), Some(3));
}
