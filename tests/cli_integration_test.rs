//! CLI integration tests for the lds-args binary.

mod common;

use assert_cmd::Command;
use common::{annotated_input, value_lines, write_input};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;

// ============================================================
// Helper functions
// ============================================================

/// Build an `assert_cmd::Command` pointing at the `lds-args` binary,
/// with its working directory set to `dir` and no env overrides.
fn lds_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("lds-args");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("LDS_ARGS_SETTINGS")
        .env("NO_COLOR", "1");
    cmd
}

/// Run a command with `--json`, assert success, and return the parsed
/// JSON value from stdout.
fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = lds_cmd(dir)
        .args(args)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("stdout should be JSON")
}

// ============================================================
// check
// ============================================================

#[test]
fn test_check_good_file() {
    let (dir, path) = write_input(&annotated_input(&value_lines()));

    lds_cmd(dir.path())
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("54 input arguments OK"))
        .stdout(predicate::str::contains("diagnostics on"));
}

#[test]
fn test_check_short_file_exits_with_mismatch_status() {
    let lines = value_lines();
    let (dir, path) = write_input(&lines[..53].join("\n"));

    lds_cmd(dir.path())
        .args(["check", path.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("records read=53"));
}

#[test]
fn test_check_missing_file_json() {
    let dir = common::temp_dir();

    let output = lds_cmd(dir.path())
        .args(["check", "nope.txt", "--json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let body: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["path"], "nope.txt");
}

#[test]
fn test_check_strict_flag() {
    let mut lines = value_lines();
    lines[1] = "year2005".to_string();
    let (dir, path) = write_input(&lines.join("\n"));

    lds_cmd(dir.path())
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success();

    lds_cmd(dir.path())
        .args(["check", "--strict", path.to_str().unwrap()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("out_year_prod_ha_lr"));
}

#[test]
fn test_strict_integers_from_settings_file() {
    let mut lines = value_lines();
    lines[0] = "on".to_string();
    let (dir, path) = write_input(&lines.join("\n"));
    fs::write(
        dir.path().join("lds-args.yaml"),
        "loader:\n  strict_integers: true\n",
    )
    .unwrap();

    lds_cmd(dir.path())
        .args(["check", path.to_str().unwrap()])
        .assert()
        .code(3);
}

// ============================================================
// show
// ============================================================

#[test]
fn test_show_json_has_every_field() {
    let lines = value_lines();
    let (dir, path) = write_input(&lines.join("\n"));

    let body = run_json(dir.path(), &["show", path.to_str().unwrap()]);
    let object = body.as_object().expect("record should be an object");

    assert_eq!(object.len(), 54);
    assert_eq!(body["out_year_prod_ha_lr"], 2005);
    assert_eq!(body["inpath"], lines[5].as_str());
}

#[test]
fn test_show_single_field() {
    let (dir, path) = write_input(&value_lines().join("\n"));

    lds_cmd(dir.path())
        .args(["show", path.to_str().unwrap(), "--field", "in_year_sage_crops"])
        .assert()
        .success()
        .stdout("1970\n");
}

#[test]
fn test_show_unknown_field() {
    let (dir, path) = write_input(&value_lines().join("\n"));

    lds_cmd(dir.path())
        .args(["show", path.to_str().unwrap(), "--field", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field: colour"));
}

#[test]
fn test_show_table() {
    let (dir, path) = write_input(&value_lines().join("\n"));

    lds_cmd(dir.path())
        .args(["show", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("lt_map_fname"))
        .stdout(predicate::str::contains("./data/slot_54.csv"));
}

// ============================================================
// schema
// ============================================================

#[test]
fn test_schema_json() {
    let dir = common::temp_dir();
    let body = run_json(dir.path(), &["schema"]);
    let fields = body.as_array().expect("schema should be an array");

    assert_eq!(fields.len(), 54);
    assert_eq!(fields[0]["name"], "diagnostics");
    assert_eq!(fields[0]["kind"], "integer");
    assert_eq!(fields[53]["slot"], 54);
    assert_eq!(fields[53]["kind"], "text");
}

// ============================================================
// template
// ============================================================

#[test]
fn test_template_round_trip() {
    let dir = common::temp_dir();

    lds_cmd(dir.path())
        .args(["template", "--output", "input.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 54 input slots"));

    lds_cmd(dir.path())
        .args(["check", "input.txt"])
        .assert()
        .success();
}

#[test]
fn test_template_refuses_to_overwrite() {
    let dir = common::temp_dir();
    fs::write(dir.path().join("input.txt"), "keep me").unwrap();

    lds_cmd(dir.path())
        .args(["template", "--output", "input.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(dir.path().join("input.txt")).unwrap(), "keep me");

    lds_cmd(dir.path())
        .args(["template", "--output", "input.txt", "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(dir.path().join("input.txt")).unwrap(), "keep me");
}

#[test]
fn test_template_from_existing_file() {
    let lines = value_lines();
    let (dir, path) = write_input(&annotated_input(&lines));

    lds_cmd(dir.path())
        .args(["template", "--from", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# [15] cell_area_fname (text)"))
        .stdout(predicate::str::contains("./data/slot_15.csv"));
}
