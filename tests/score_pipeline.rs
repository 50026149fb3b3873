// tests/score_pipeline.rs - End-to-end scoring through the real shell runner
#![cfg(unix)]

use qscore_core::config::{CommandSet, Config, DiscoveryConfig};
use qscore_core::discovery;
use qscore_core::exit::QscoreExit;
use qscore_core::phases::Scorer;
use qscore_core::types::{Category, Gate, Severity};
use qscore_core::verification::ShellRunner;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let d = tempfile::Builder::new().prefix("proj").tempdir().unwrap();
    for (rel, body) in files {
        let p = d.path().join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, body).unwrap();
    }
    d
}

fn passing() -> CommandSet {
    CommandSet {
        build: "true".into(),
        test: "echo '12 passed, 0 failed'".into(),
        lint: "true".into(),
        typecheck: "true".into(),
    }
}

fn score(root: &Path, commands: &CommandSet) -> qscore_core::types::ScoreResult {
    let runner = ShellRunner::new(root, Duration::from_secs(30));
    let discovery_config = DiscoveryConfig::default();
    Scorer::new(&runner, commands).run(|| discovery::discover(root, &discovery_config, &[]))
}

#[test]
fn clean_project_reaches_release() {
    let d = project(&[("src/app.py", "def main():\n    return 1\n")]);
    let r = score(d.path(), &passing());
    assert!(r.findings().is_empty(), "{:?}", r.findings());
    assert_eq!(r.score(), 100);
    assert_eq!(r.gate(), Gate::Release);
    assert_eq!(QscoreExit::for_result(&r).code(), 0);
}

#[test]
fn failing_build_stops_everything() {
    let d = project(&[("src/app.py", "password = 'hunter2hunter2'\n# TODO x\n")]);
    let mut cmds = passing();
    cmds.build = "echo 'cc: error: no input files'; exit 2".into();
    cmds.test = "touch tests-ran".into();
    let r = score(d.path(), &cmds);
    assert_eq!(r.findings().len(), 1);
    assert_eq!(r.findings()[0].category(), Category::Build);
    assert_eq!(r.auto_fail_reason(), "Build failed");
    assert!(!d.path().join("tests-ran").exists());
    assert_eq!(QscoreExit::for_result(&r), QscoreExit::AutoFail);
}

#[test]
fn missing_build_tool_is_a_build_failure() {
    let d = project(&[]);
    let mut cmds = passing();
    cmds.build = "definitely-not-a-real-build-tool --release".into();
    let r = score(d.path(), &cmds);
    assert!(r.auto_fail());
    assert_eq!(r.gate(), Gate::AutoFail);
}

#[test]
fn build_timeout_is_a_build_failure() {
    let d = project(&[]);
    let mut cmds = passing();
    cmds.build = "sleep 10".into();
    let runner = ShellRunner::new(d.path(), Duration::from_millis(300));
    let r = Scorer::new(&runner, &cmds).run(Vec::new);
    assert!(r.auto_fail());
    assert!(r.findings()[0].message().contains("timed out"));
}

#[test]
fn lint_example_scores_commit() {
    let d = project(&[]);
    let mut cmds = passing();
    cmds.lint = "printf 'a.js:1 error x\\nb.js:2 error y\\nc.js:3 error z\\nd.js:4 warning p\\ne.js:5 warning q\\n'; exit 1"
        .into();
    let r = score(d.path(), &cmds);
    assert_eq!(r.major_count(), 3);
    assert_eq!(r.minor_count(), 2);
    assert_eq!(r.score(), 83);
    assert_eq!(r.gate(), Gate::Commit);
    assert_eq!(QscoreExit::for_result(&r).code(), 0);
}

#[test]
fn secret_forces_auto_fail_after_clean_commands() {
    let d = project(&[("src/settings.py", "password = \"hunter2hunter2\"\n")]);
    let r = score(d.path(), &passing());
    assert!(r.auto_fail());
    assert_eq!(r.score(), 0);
    assert_eq!(r.gate(), Gate::AutoFail);
    assert_eq!(r.critical_count(), 1);
    assert_eq!(QscoreExit::for_result(&r).code(), 2);
}

#[test]
fn secrets_in_test_dirs_are_ignored() {
    let d = project(&[("tests/fixtures.py", "password = \"hunter2hunter2\"\n")]);
    let r = score(d.path(), &passing());
    assert!(!r.auto_fail());
}

#[test]
fn source_heuristics_accumulate_across_files() {
    let mut long = String::from("def first():\n");
    long.push_str(&"    x = 1\n".repeat(60));
    long.push_str("def second():\n    pass\n");
    let d = project(&[
        ("src/long.py", &long),
        ("src/types.ts", "// @ts-ignore\nlet v: any;\n"),
        ("lib/notes.go", "// FIXME later\nvar x interface{}\n"),
    ]);
    let r = score(d.path(), &passing());
    let by_category = |c: Category| r.findings().iter().filter(|f| f.category() == c).count();
    assert_eq!(by_category(Category::Complexity), 1);
    assert_eq!(by_category(Category::Typing), 3);
    assert_eq!(by_category(Category::Maintenance), 1);
    assert_eq!(r.total_deductions(), 3 + 3 * 2 + 1);
    assert_eq!(r.score(), 90);
    assert_eq!(r.gate(), Gate::Pr);
    assert!(r
        .findings()
        .iter()
        .filter(|f| f.severity() == Severity::Minor)
        .all(|f| f.file().is_some()));
}

#[test]
fn config_file_drives_commands() {
    let d = project(&[("qscore.toml", "[commands]\nbuild = \"true\"\ntest = \"true\"\nlint = \"true\"\ntypecheck = \"echo PLACEHOLDER; exit 1\"\n")]);
    let config = Config::load(d.path()).unwrap();
    let r = score(d.path(), &config.commands);
    assert!(r.findings().is_empty());
}
