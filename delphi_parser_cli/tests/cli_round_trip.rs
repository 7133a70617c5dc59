//! Drives the built `delphi-parse` binary end to end: a valid fixture
//! produces JSON naming a `Unit` file; a malformed one exits non-zero and
//! writes the diagnostic to stderr.

use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_delphi-parse"))
}

#[test]
fn valid_fixture_prints_unit_json_on_stdout() {
    let output = bin()
        .arg("tests/fixtures/valid_unit.pas")
        .output()
        .expect("failed to run delphi-parse");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["kind"], "unit");
    assert_eq!(json["name"], "Geometry");
}

#[test]
fn malformed_fixture_exits_non_zero_with_diagnostic_on_stderr() {
    let output = bin()
        .arg("tests/fixtures/malformed_unit.pas")
        .output()
        .expect("failed to run delphi-parse");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expected but was"));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file_reports_the_os_error_and_exits_non_zero() {
    let output = bin()
        .arg("tests/fixtures/does_not_exist.pas")
        .output()
        .expect("failed to run delphi-parse");

    assert!(!output.status.success());
}

#[test]
fn version_flag_prints_the_crate_version() {
    let output = bin().arg("--version").output().expect("failed to run delphi-parse");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_usage_and_exits_non_zero() {
    let output = bin().output().expect("failed to run delphi-parse");
    assert!(!output.status.success());
}
