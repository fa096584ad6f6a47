//! Behavioral specs for classifying a log file.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Text output
// =============================================================================

/// Counts and timing are printed in the fixed level order
#[test]
fn prints_totals_and_level_counts() {
    let tmp = LogDir::new();
    let log = tmp.log("app.log", SAMPLE);
    logrdr_cmd()
        .current_dir(tmp.path())
        .arg("--file")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicates::str::contains("Messages: 2 Time "))
        .stdout(predicates::str::contains("T:0 D:0 I:1 W:0 E:1 F:0"))
        .stdout(predicates::str::contains("Unknown").not());
}

/// Messages without a recognized level are reported as Unknown
#[test]
fn reports_unknown_messages() {
    let tmp = LogDir::new();
    let log = tmp.log(
        "app.log",
        &["2024-01-01 00:00:00 starting", "2024-01-01 00:00:01 [Warn] slow"],
    );
    logrdr_cmd()
        .current_dir(tmp.path())
        .args(["-f"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicates::str::contains("Messages: 2"))
        .stdout(predicates::str::contains("W:1"))
        .stdout(predicates::str::contains("Unknown: 1"));
}

/// An empty file is valid input
#[test]
fn empty_file_counts_nothing() {
    let tmp = LogDir::new();
    let log = tmp.file("empty.log", "");
    logrdr_cmd()
        .current_dir(tmp.path())
        .arg("-f")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicates::str::contains("Messages: 0"));
}

// =============================================================================
// JSON output
// =============================================================================

/// `--output json` produces the same counts as structured data
#[test]
fn json_output_is_valid() {
    let tmp = LogDir::new();
    let log = tmp.log("app.log", SAMPLE);
    let output = logrdr_cmd()
        .current_dir(tmp.path())
        .args(["--output", "json", "--file"])
        .arg(&log)
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    assert_eq!(json["messages"], 2);
    assert_eq!(json["levels"]["info"], 1);
    assert_eq!(json["levels"]["error"], 1);
    assert_eq!(json["unknown"], 0);
    assert_eq!(json["lines"], 3);
}

// =============================================================================
// Line length
// =============================================================================

/// Long lines are truncated before matching
#[test]
fn max_line_length_flag_truncates_before_matching() {
    let tmp = LogDir::new();
    let long = format!("2024-01-01 00:00:00 {} ERROR", "x".repeat(100));
    let log = tmp.log("long.log", &[&long]);
    logrdr_cmd()
        .current_dir(tmp.path())
        .args(["--max-line-length", "32", "-o", "json", "-f"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicates::str::contains("\"truncated_lines\": 1"))
        .stdout(predicates::str::contains("\"unknown\": 1"));
}

// =============================================================================
// Errors
// =============================================================================

/// A missing file is reported and fails with the input error code
#[test]
fn missing_file_fails() {
    let tmp = LogDir::new();
    logrdr_cmd()
        .current_dir(tmp.path())
        .args(["-f", "does-not-exist.log"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("does-not-exist.log"))
        .stdout(predicates::str::is_empty());
}
