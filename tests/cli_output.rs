//! Integration tests for the `luopan` binary.
//!
//! The report is written to stdout and must parse as JSON on its own; log
//! events go to stderr.

use std::process::Command;

use serde_json::Value;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_luopan"))
        .args(args)
        .env("RUST_LOG", "debug")
        .env_remove("LUOPAN__LOGGING__FORMAT")
        .output()
        .expect("failed to run luopan binary")
}

#[test]
fn stdout_is_only_the_json_report() {
    let output = run(&["180", "--compact"]);
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["label"], "子山午向");
    assert_eq!(report["facing"], "wu");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Orientation analyzed"));
}

#[test]
fn json_log_format_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_luopan"))
        .args(["-90", "--declination", "-4.5"])
        .env("RUST_LOG", "debug")
        .env("LUOPAN__LOGGING__FORMAT", "json")
        .output()
        .expect("failed to run luopan binary");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["sitting"], "mao");
    assert!(!output.stderr.is_empty());
}

#[test]
fn invalid_bearing_exits_non_zero_with_empty_stdout() {
    let output = run(&["NaN"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
