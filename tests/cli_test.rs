//! CLI Tests for tabconv
//!
//! Runs the built binary in a temporary working directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn tabconv(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tabconv"))
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn setup() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("in")).unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();
    dir
}

#[test]
fn test_converts_matching_files() {
    let dir = setup();
    fs::write(dir.path().join("in/a.csv"), "x,y\n1,2\n").unwrap();
    fs::write(dir.path().join("in/b.csv"), "z\n").unwrap();
    fs::write(dir.path().join("in/skip.txt"), "ignored\n").unwrap();

    let output = tabconv(dir.path(), &["-d", ",", "-o", "out", "in/*.csv"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(dir.path().join("out/a.xlsx").is_file());
    assert!(dir.path().join("out/b.xlsx").is_file());
    assert!(!dir.path().join("out/skip.xlsx").exists());
}

// Per-file failures are printed and do not change the exit status
#[test]
fn test_bad_file_does_not_stop_the_run() {
    let dir = setup();
    let mut broken = b"PK\x03\x04".to_vec();
    broken.resize(128, 0);
    fs::write(dir.path().join("in/a_broken.xlsx"), broken).unwrap();
    fs::write(dir.path().join("in/b_good.tsv"), "one\ttwo\n").unwrap();

    let output = tabconv(dir.path(), &["-o", "out", "in/*"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("failed to convert file \"in/a_broken.xlsx\""));
    assert!(dir.path().join("out/b_good.xlsx").is_file());
    assert!(!dir.path().join("out/a_broken.csv").exists());
}

#[test]
fn test_output_defaults_to_current_directory() {
    let dir = setup();
    fs::write(dir.path().join("in/data.tsv"), "k\tv\n").unwrap();

    let output = tabconv(dir.path(), &["in/data.tsv"]);

    assert!(output.status.success());
    assert!(dir.path().join("data.xlsx").is_file());
}

#[test]
fn test_multi_byte_delimiter_is_rejected() {
    let dir = setup();
    fs::write(dir.path().join("in/a.csv"), "x\n").unwrap();

    let output = tabconv(dir.path(), &["-d", "::", "-o", "out", "in/*.csv"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("delimiter must be single byte character"));
    assert!(fs::read_dir(dir.path().join("out")).unwrap().next().is_none());
}

#[test]
fn test_missing_output_dir_is_rejected() {
    let dir = setup();
    fs::write(dir.path().join("in/a.csv"), "x\n").unwrap();

    let output = tabconv(dir.path(), &["-o", "nowhere", "in/*.csv"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
    assert!(!dir.path().join("nowhere").exists());
}

#[test]
fn test_patterns_are_required() {
    let dir = setup();

    let output = tabconv(dir.path(), &[]);

    assert!(!output.status.success());
}

// A pattern without matches converts nothing and still succeeds
#[test]
fn test_pattern_without_matches() {
    let dir = setup();

    let output = tabconv(dir.path(), &["-o", "out", "in/*.xlsx"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn test_output_dir_expands_home() {
    let dir = setup();
    let home = tempfile::tempdir().unwrap();
    fs::create_dir(home.path().join("exports")).unwrap();
    fs::write(dir.path().join("in/a.csv"), "x\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_tabconv"))
        .current_dir(dir.path())
        .env("HOME", home.path())
        .args(["-o", "~/exports", "in/a.csv"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(home.path().join("exports/a.xlsx").is_file());
}
