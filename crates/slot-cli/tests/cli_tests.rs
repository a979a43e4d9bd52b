//! Integration tests for the `slots` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the times, check, and
//! active subcommands through the actual binary, covering stdin and file
//! input, the policy flags, and error handling.
//!
//! Fixture dates sit in mid-2030 so "past date" checks against the real
//! clock stay stable: 2030-06-03 is a Monday, 2030-06-08 a Saturday.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the blocks.json fixture.
fn blocks_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/blocks.json")
}

/// Helper: read the blocks.json fixture as a string.
fn blocks_json() -> String {
    std::fs::read_to_string(blocks_json_path()).expect("blocks.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// times subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn times_stdin_filters_blocked_slot() {
    // 09:00-10:00 is blocked on 2030-06-03; 10:00 sits on the end boundary
    // and stays bookable.
    Command::cargo_bin("slots")
        .unwrap()
        .args(["times", "--date", "2030-06-03", "--start", "08:00", "--end", "12:00"])
        .write_stdin(blocks_json())
        .assert()
        .success()
        .stdout(predicate::eq("08:00\n10:00\n11:00\n12:00\n"));
}

#[test]
fn times_file_input() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "times",
            "--date",
            "2030-06-03",
            "--start",
            "08:00",
            "--end",
            "12:00",
            "-i",
            blocks_json_path(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("08:00"))
        .stdout(predicate::str::contains("09:00").not());
}

#[test]
fn times_default_window_is_eight_to_eighteen() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["times", "--date", "2030-06-05"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::eq(
            "08:00\n09:00\n10:00\n11:00\n12:00\n13:00\n14:00\n15:00\n16:00\n17:00\n18:00\n",
        ));
}

#[test]
fn times_whole_day_block_prints_nothing() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["times", "--date", "2030-06-04", "-i", blocks_json_path()])
        .assert()
        .success()
        .stdout(predicate::eq(""));
}

#[test]
fn times_invalid_json_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["times", "--date", "2030-06-03"])
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse blocks JSON"));
}

#[test]
fn times_invalid_date_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["times", "--date", "06/03/2030"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn times_invalid_hours_fail() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["times", "--date", "2030-06-03", "--start", "8am"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_whole_day_block_is_blocked() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["check", "--date", "2030-06-04", "-i", blocks_json_path()])
        .assert()
        .success()
        .stdout(predicate::eq("blocked\n"));
}

#[test]
fn check_partial_block_stays_bookable() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["check", "--date", "2030-06-03", "-i", blocks_json_path()])
        .assert()
        .success()
        .stdout(predicate::eq("bookable\n"));
}

#[test]
fn check_weekend_blocked_unless_allowed() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["check", "--date", "2030-06-08"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::eq("blocked\n"));

    Command::cargo_bin("slots")
        .unwrap()
        .args(["check", "--date", "2030-06-08", "--allow-weekends"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::eq("bookable\n"));
}

#[test]
fn check_past_date_is_blocked() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["check", "--date", "2020-01-02", "-i", blocks_json_path()])
        .assert()
        .success()
        .stdout(predicate::eq("blocked\n"));
}

#[test]
fn check_invalid_timezone_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["check", "--date", "2030-06-03", "--timezone", "Mars/Olympus_Mons"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn check_accepts_explicit_timezone() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["check", "--date", "2030-06-03", "--timezone", "America/New_York"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::eq("bookable\n"));
}

// ─────────────────────────────────────────────────────────────────────────────
// active subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn active_drops_past_blocks() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["active", "-i", blocks_json_path()])
        .output()
        .expect("active should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("output should be UTF-8");

    assert!(stdout.contains("2030-06-03"), "future partial block kept");
    assert!(stdout.contains("2030-06-04"), "future whole-day block kept");
    assert!(!stdout.contains("2020-01-02"), "past block dropped");
}

#[test]
fn active_output_is_valid_block_json() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["active", "-i", blocks_json_path()])
        .output()
        .expect("active should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("output should be UTF-8");

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("output is JSON");
    let blocks = value.as_array().expect("output is a JSON array");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["isBlocked"], serde_json::json!(false));
    assert_eq!(blocks[0]["blockedSlots"][0]["startTime"], serde_json::json!("09:00"));
}

// ─────────────────────────────────────────────────────────────────────────────
// General CLI behavior
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("slots")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("times"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("active"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("unrecognized")));
}

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["times", "--date", "2030-06-03", "-i", "/nonexistent/blocks.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}
