//! Integration tests for the `scrobblelog` binary
//!
//! Runs the built executable against temporary files and checks the
//! confirmation line, diagnostics, and exit codes seen by a shell user.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_binary(input: &Path, output: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scrobblelog"))
        .arg("--input")
        .arg(input)
        .arg("--output")
        .arg(output)
        .args(extra)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run scrobblelog binary")
}

#[test]
fn test_success_prints_confirmation_and_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("history.csv");
    let output = temp_dir.path().join(".scrobbler.log");
    fs::write(&input, "Radiohead,OK Computer,Paranoid Android,03 Feb 2026 15:02\n").unwrap();

    let result = run_binary(&input, &output, &[]);

    assert_eq!(result.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(
        stdout.contains(&format!("wrote {}", output.display())),
        "unexpected stdout: {}",
        stdout
    );
    assert!(stdout.contains("OK:"));
    assert!(fs::read_to_string(&output).unwrap().contains("\t1770141720\t\n"));
}

#[test]
fn test_malformed_row_exits_non_zero_with_line_number() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("history.csv");
    let output = temp_dir.path().join(".scrobbler.log");
    fs::write(&input, "A,B,C,01 Jan 2024 10:00\n\nD,E\n").unwrap();

    let result = run_binary(&input, &output, &[]);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Error:"), "unexpected stderr: {}", stderr);
    assert!(stderr.contains("Line 3:"), "unexpected stderr: {}", stderr);
    assert!(stderr.contains("D,E"));
    assert!(result.stdout.is_empty());
    assert!(!output.exists());
}

#[test]
fn test_bad_date_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("history.csv");
    let output = temp_dir.path().join(".scrobbler.log");
    fs::write(&input, "A,B,C,2024-01-01 10:00\n").unwrap();

    let result = run_binary(&input, &output, &[]);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Line 1:"), "unexpected stderr: {}", stderr);
    assert!(stderr.contains("2024-01-01 10:00"));
}

#[test]
fn test_unknown_time_zone_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("history.csv");
    let output = temp_dir.path().join(".scrobbler.log");
    fs::write(&input, "A,B,C,01 Jan 2024 10:00\n").unwrap();

    let result = run_binary(&input, &output, &["--tz", "Not/AZone"]);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Not/AZone"));
    assert!(!output.exists());
}

#[test]
fn test_invalid_rating_is_rejected_by_argument_parser() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("history.csv");
    let output = temp_dir.path().join(".scrobbler.log");
    fs::write(&input, "A,B,C,01 Jan 2024 10:00\n").unwrap();

    let result = run_binary(&input, &output, &["--rating", "X"]);

    assert_eq!(result.status.code(), Some(2));
    assert!(!output.exists());
}
