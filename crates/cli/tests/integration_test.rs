//! End-to-end tests of the `reserve-sizer` binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "types.input.files 120\ngarbage line\ntypes.input.classes 300\ntypes.input.modules 50\n";

fn reserve_sizer() -> Command {
    Command::new(env!("CARGO_BIN_EXE_reserve-sizer"))
}

#[test]
fn shows_help() {
    reserve_sizer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reserve-sizer"))
        .stdout(predicate::str::contains("--class-floor"));
}

#[test]
fn reads_stdin_and_prints_flags() {
    reserve_sizer()
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("--reserve-class-table-capacity=1024\n");
}

#[test]
fn both_tables_in_fixed_order() {
    let text = "types.input.methods.total 20000\ntypes.input.classes 600\n";
    reserve_sizer()
        .arg("-")
        .write_stdin(text)
        .assert()
        .success()
        .stdout("--reserve-class-table-capacity=2048\n--reserve-method-table-capacity=65536\n");
}

#[test]
fn no_counters_prints_nothing_and_succeeds() {
    reserve_sizer()
        .write_stdin("the checker crashed before printing counters\n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("no counter lines"));
}

#[test]
fn reads_files_and_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("counters.txt");
    let output = dir.path().join("flags.txt");
    fs::write(&input, SAMPLE).unwrap();

    reserve_sizer()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "--reserve-class-table-capacity=1024\n");
}

#[test]
fn json_output() {
    let assert = reserve_sizer().args(["--format", "json"]).write_stdin(SAMPLE).assert().success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");

    assert_eq!(json["metrics"]["file_count"], 120);
    assert_eq!(json["metrics"]["class_module_count"], 350);
    assert!(json["metrics"]["method_count"].is_null());
    assert_eq!(json["recommendations"][0]["capacity"], 1024);
}

#[test]
fn report_output() {
    reserve_sizer()
        .args(["--format", "report"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown"))
        .stdout(predicate::str::contains("--reserve-class-table-capacity=1024"));
}

#[test]
fn overflow_fails_but_keeps_other_table() {
    let text = format!("types.input.classes {}\ntypes.input.methods.total 10\n", u64::MAX);
    reserve_sizer()
        .write_stdin(text)
        .assert()
        .failure()
        .stdout("--reserve-method-table-capacity=4096\n")
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn custom_floor_and_counter() {
    reserve_sizer()
        .args(["--class-floor", "64", "--class-counter", "re:symbols\\..*"])
        .write_stdin("symbols.a 10\nsymbols.b 10\ntypes.input.classes 99999\n")
        .assert()
        .success()
        .stdout("--reserve-class-table-capacity=64\n");
}

#[test]
fn invalid_counter_pattern_is_a_usage_error() {
    reserve_sizer().args(["--class-counter", "re:("]).write_stdin("").assert().failure();
}

#[test]
fn missing_input_file_fails() {
    reserve_sizer()
        .arg("/definitely/not/here/counters.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[cfg(unix)]
#[test]
fn runs_checker_command() {
    reserve_sizer()
        .args([
            "--run",
            "sh",
            "--run-arg",
            "-c",
            "--run-arg",
            "echo 'types.input.classes 600' >&2; echo 'types.input.methods.total 1'; exit 1",
        ])
        .assert()
        .success()
        .stdout("--reserve-class-table-capacity=2048\n--reserve-method-table-capacity=4096\n");
}
