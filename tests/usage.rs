use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cargo_bin() -> Command { Command::cargo_bin("bf").unwrap() }

#[test]
fn no_arguments_prints_usage_and_fails() {
    cargo_bin()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:").and(predicate::str::contains("<FILE>")));
}

#[test]
fn two_arguments_prints_usage_without_running() {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "+++.").unwrap();

    cargo_bin()
        .arg(tf.path())
        .arg(tf.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    cargo_bin()
        .arg("--debug")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}
