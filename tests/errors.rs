use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::time::Duration;

fn cargo_bin() -> Command { Command::cargo_bin("bf").unwrap() }

fn program_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn test_unmatched_open_bracket_error() {
    let tf = program_file("[+");
    cargo_bin()
    .timeout(Duration::from_secs(2)).arg(tf.path())
    .assert()
    .code(1)
    .stderr(predicate::str::contains("unmatched bracket '['"))
    .stdout(predicate::str::is_empty());
}

#[test]
fn test_unmatched_close_bracket_points_at_source() {
    // The stray ']' is the 3rd instruction but sits on line 2, column 4
    let tf = program_file("++\nabc]");
    cargo_bin()
    .timeout(Duration::from_secs(2)).arg(tf.path())
    .assert()
    .code(1)
    .stderr(predicate::str::contains("unmatched bracket ']'")
        .and(predicate::str::contains("line 2, column 4"))
        .and(predicate::str::contains("   ^")));
}

#[test]
fn test_nothing_runs_before_a_load_error() {
    let tf = program_file("+++.[");
    cargo_bin()
    .timeout(Duration::from_secs(2)).arg(tf.path())
    .assert()
    .failure()
    .stdout(predicate::str::is_empty());
}

#[test]
fn test_input_exhausted_error() {
    let tf = program_file("+.,.");
    cargo_bin()
    .timeout(Duration::from_secs(2)).arg(tf.path())
    .write_stdin("")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("input exhausted"))
    // output produced before the failure is kept
    .stdout("\u{1}");
}

#[test]
fn test_missing_file_error() {
    cargo_bin()
    .timeout(Duration::from_secs(2)).arg("/definitely/not/here.bf")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("failed to read"));
}
