//! Tests that run the compiled binary and check which stream gets what
//!
//! Command results go to stdout so they can be redirected; progress and
//! errors go to stderr.

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn setup_templates() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in [
        ("Go.gitignore", "*.exe\n"),
        ("Global/macOS.gitignore", ".DS_Store\n"),
    ] {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
    dir
}

/// Run the binary with an isolated home so no user config is picked up
fn ignorepick(repo: &Path, args: &[&str]) -> Output {
    let home = tempfile::tempdir().unwrap();

    Command::new(env!("CARGO_BIN_EXE_ignorepick"))
        .arg("--repo-dir")
        .arg(repo)
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("IGNOREPICK_QUIET")
        .env_remove("IGNOREPICK_PATTERN")
        .env_remove("IGNOREPICK_REPO_URL")
        .env_remove("IGNOREPICK_REPO_DIR")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn test_list_stdout_holds_only_names() {
    let repo = setup_templates();

    let output = ignorepick(repo.path(), &["list"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Global/macOS.gitignore\nGo.gitignore\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("Parsed 2 files."));
}

#[test]
fn test_quiet_silences_progress() {
    let repo = setup_templates();

    let output = ignorepick(repo.path(), &["list", "--quiet"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 2);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_print_without_terminal_writes_nothing_to_stdout() {
    let repo = setup_templates();

    let output = ignorepick(repo.path(), &["pick", "--print"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("terminal"));
}

#[test]
fn test_completions_do_not_need_templates() {
    let missing = tempfile::tempdir().unwrap();

    let output = ignorepick(&missing.path().join("absent"), &["completions", "bash"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("ignorepick"));
    assert!(output.stderr.is_empty());
}
