//! Behavioral specs for `--db` persistence.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use rusqlite::Connection;

use crate::prelude::*;

/// Every message is stored with header, body and level
#[test]
fn db_flag_stores_records() {
    let tmp = LogDir::new();
    let log = tmp.log("app.log", SAMPLE);
    let db = tmp.path().join("app.db");
    logrdr_cmd()
        .current_dir(tmp.path())
        .arg("-f")
        .arg(&log)
        .arg("--db")
        .arg(&db)
        .assert()
        .success()
        .stdout(predicates::str::contains("Messages: 2"));

    let conn = Connection::open(&db).unwrap();
    let rows: Vec<(String, Option<String>, i64)> = conn
        .prepare("SELECT header, body, level FROM log ORDER BY ix")
        .unwrap()
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        rows,
        vec![
            (
                "2024-01-01 00:00:00 INFO start".to_string(),
                Some("more detail".to_string()),
                2
            ),
            ("2024-01-01 00:00:01 ERROR fail".to_string(), None, 4),
        ]
    );
}

/// A store that cannot be opened does not stop counting
#[test]
fn unusable_db_is_not_fatal() {
    let tmp = LogDir::new();
    let log = tmp.log("app.log", SAMPLE);
    logrdr_cmd()
        .current_dir(tmp.path())
        .arg("-f")
        .arg(&log)
        .arg("--db")
        .arg(tmp.path().join("missing-dir").join("app.db"))
        .assert()
        .success()
        .stdout(predicates::str::contains("T:0 D:0 I:1 W:0 E:1 F:0"))
        .stderr(predicates::str::contains("record store disabled"));
}

/// Naming the input as the database keeps the input intact
#[test]
fn db_same_as_input_is_refused() {
    let tmp = LogDir::new();
    let log = tmp.log("app.log", SAMPLE);
    logrdr_cmd()
        .current_dir(tmp.path())
        .arg("-f")
        .arg(&log)
        .arg("--db")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicates::str::contains("Messages: 2"))
        .stderr(predicates::str::contains("record store disabled"))
        .stderr(predicates::str::contains("2 record(s) not stored"));
    assert_eq!(
        std::fs::read_to_string(&log).unwrap(),
        format!("{}\n", SAMPLE.join("\n"))
    );
}

/// A disabled store is reported in JSON output
#[test]
fn disabled_store_in_json() {
    let tmp = LogDir::new();
    let log = tmp.log("app.log", SAMPLE);
    let output = logrdr_cmd()
        .current_dir(tmp.path())
        .args(["-o", "json", "-f"])
        .arg(&log)
        .arg("--db")
        .arg(tmp.path().join("missing-dir").join("app.db"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["store_disabled"], true);
    assert_eq!(json["persistence_failures"], 2);
    assert_eq!(json["stored"], 0);
}

/// Verbose mode describes the store tuning
#[test]
fn verbose_shows_tuning() {
    let tmp = LogDir::new();
    let log = tmp.log("app.log", SAMPLE);
    logrdr_cmd()
        .current_dir(tmp.path())
        .args(["-v", "-f"])
        .arg(&log)
        .arg("--db")
        .arg(tmp.path().join("app.db"))
        .assert()
        .success()
        .stderr(predicates::str::contains("cache pages:"))
        .stderr(predicates::str::contains("records:"));
}
