//! CLI-level tests for argument handling and root validation

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bough() -> Command {
    Command::cargo_bin("bough").expect("binary should build")
}

#[test]
fn test_missing_root_reports_and_fails() {
    let dir = TempDir::new().unwrap();

    bough()
        .current_dir(dir.path())
        .arg("no-such-dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Directory 'no-such-dir' does not exist.",
        ))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_file_root_reports_and_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plain.txt"), "not a directory").unwrap();

    bough()
        .current_dir(dir.path())
        .arg("plain.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: 'plain.txt' is not a directory.",
        ))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_valid_root_succeeds_with_tree_on_stdout() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("hello.txt"), "").unwrap();

    bough()
        .current_dir(dir.path())
        .env_remove("NO_COLOR")
        .env_remove("FORCE_COLOR")
        .assert()
        .success()
        .stdout(predicate::str::contains("└── hello.txt"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_color_never_emits_no_escape_codes() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "").unwrap();

    bough()
        .current_dir(dir.path())
        .env("TERM", "xterm")
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains('\u{1b}').not());
}

#[test]
fn test_color_always_emits_escape_codes() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();

    bough()
        .current_dir(dir.path())
        // termcolor's Auto choice still consults TERM/NO_COLOR
        .env("TERM", "xterm")
        .env_remove("NO_COLOR")
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains('\u{1b}'));
}

#[test]
fn test_help_mentions_flags() {
    bough()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ignore"))
        .stdout(predicate::str::contains("--level"))
        .stdout(predicate::str::contains("--color"));
}

#[test]
fn test_version_flag() {
    bough()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bough"));
}
