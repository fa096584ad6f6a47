//! Behavioral specs for config file lookup.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > logrdr.toml in a parent directory applies
#[test]
fn config_in_parent_directory_applies() {
    let tmp = LogDir::new();
    tmp.config("[reader]\nmax_line_length = 24\n");
    std::fs::create_dir(tmp.path().join("logs")).unwrap();
    let long = format!("2024-01-01 00:00:00 {} INFO", "x".repeat(40));
    let log = tmp.log("logs/app.log", &[&long]);
    logrdr_cmd()
        .current_dir(tmp.path().join("logs"))
        .args(["-o", "json", "-f"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicates::str::contains("\"truncated_lines\": 1"));
}

/// > --config takes precedence over discovery
#[test]
fn explicit_config_is_used() {
    let tmp = LogDir::new();
    tmp.config("unknown_key = 1\n");
    let explicit = tmp.file("other.toml", "version = 1\n");
    let log = tmp.log("app.log", SAMPLE);
    logrdr_cmd()
        .current_dir(tmp.path())
        .arg("--config")
        .arg(&explicit)
        .arg("-f")
        .arg(&log)
        .assert()
        .success();
}

/// > CLI line length overrides the config file
#[test]
fn cli_line_length_overrides_config() {
    let tmp = LogDir::new();
    tmp.config("[reader]\nmax_line_length = 24\n");
    let long = format!("2024-01-01 00:00:00 {} INFO", "x".repeat(40));
    let log = tmp.log("app.log", &[&long]);
    logrdr_cmd()
        .current_dir(tmp.path())
        .args(["--max-line-length", "0", "-f"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicates::str::contains("I:1"));
}
