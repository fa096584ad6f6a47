//! Behavioral specs for config validation.
//!
//! Tests that logrdr correctly handles:
//! - Unknown config keys (errors)
//! - Out of range values (errors)
//! - Valid config (no errors)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let tmp = LogDir::new();
    tmp.config("version = 1\nunknown_key = true\n");
    let log = tmp.log("app.log", SAMPLE);
    logrdr_cmd()
        .current_dir(tmp.path())
        .arg("-f")
        .arg(&log)
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Invalid page sizes are errors
#[test]
fn invalid_page_size_fails() {
    let tmp = LogDir::new();
    tmp.config("[store]\npage_size = 1000\n");
    let log = tmp.log("app.log", SAMPLE);
    logrdr_cmd()
        .current_dir(tmp.path())
        .arg("-f")
        .arg(&log)
        .assert()
        .code(2)
        .stderr(predicates::str::contains("page_size"));
}

/// > Valid config runs normally
#[test]
fn valid_config_succeeds() {
    let tmp = LogDir::new();
    tmp.config("version = 1\n[reader]\nmax_line_length = 4096\n");
    let log = tmp.log("app.log", SAMPLE);
    logrdr_cmd()
        .current_dir(tmp.path())
        .arg("-f")
        .arg(&log)
        .assert()
        .success();
}
