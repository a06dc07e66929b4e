// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests for the `primal` binary.

use std::process::Stdio;

use assert_cmd::Command;
use predicates::prelude::*;

fn primal() -> Command {
    let mut cmd = Command::cargo_bin("primal").expect("primal binary is built");
    cmd.env_remove("RUST_LOG").env_remove("PRIMAL_CONFIG_DIR");
    cmd
}

fn primal_no_config() -> Command {
    let mut cmd = primal();
    cmd.arg("--no-config");
    cmd
}

#[test]
fn list_prints_numbered_primes() {
    primal_no_config()
        .args(["--list", "10"])
        .assert()
        .success()
        .stdout("Prime #1 = 2\nPrime #2 = 3\nPrime #3 = 5\nPrime #4 = 7\n")
        .stderr("");
}

#[test]
fn list_zero_prints_nothing() {
    primal_no_config()
        .args(["-l", "0"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn index_prints_nth_prime() {
    primal_no_config()
        .args(["--index", "100"])
        .assert()
        .success()
        .stdout("Prime #100 = 541\n");
}

#[test]
fn index_zero_is_an_error() {
    primal_no_config()
        .args(["-i", "0"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn test_reports_each_class() {
    for (number, expected) in [
        ("17", "17 is prime.\n"),
        ("18", "18 is composite.\n"),
        ("1", "1 is neither prime nor composite.\n"),
    ] {
        primal_no_config()
            .args(["--test", number])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn sieve_strategy_flag() {
    primal_no_config()
        .args(["--strategy", "sieve", "-t", "7919"])
        .assert()
        .success()
        .stdout("7919 is prime.\n");
}

#[test]
fn multiple_commands_are_rejected() {
    primal_no_config()
        .args(["--list", "10", "--test", "7"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(
            predicate::str::starts_with("Error: ")
                .and(predicate::str::contains("--test")),
        );
}

#[test]
fn non_numeric_flag_value_is_rejected() {
    primal_no_config()
        .args(["--list", "many"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn version_flag() {
    primal_no_config()
        .arg("-v")
        .assert()
        .success()
        .stdout(format!("Version: {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_flag() {
    primal_no_config()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Usage:")
                .and(predicate::str::contains("--list <CEILING>"))
                .and(predicate::str::contains("--index <INDEX>"))
                .and(predicate::str::contains("--test <NUMBER>")),
        );
}

#[test]
fn interactive_session() {
    primal_no_config()
        .write_stdin("3\n97\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[1] Print every prime up to a given ceiling.")
                .and(predicate::str::contains("Option: "))
                .and(predicate::str::ends_with("Number: \n97 is prime.\n")),
        );
}

#[test]
fn interactive_invalid_option() {
    primal_no_config()
        .write_stdin("9\n")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Invalid option"));
}

#[test]
fn interactive_out_of_range_number() {
    primal_no_config()
        .write_stdin("1\n99999999999999999999\n")
        .assert()
        .code(1)
        .stderr("Error: Numeric value of string was out of range for the requested numeric type.\n");
}

#[test]
fn interactive_non_numeric_argument() {
    primal_no_config()
        .write_stdin("3\nseventeen\n")
        .assert()
        .code(1)
        .stderr("Error: String was not a valid numeric value.\n");
}

#[test]
fn unreadable_stdin_reports_the_cause_once() {
    primal_no_config()
        .write_stdin(vec![0xff, b'\n'])
        .assert()
        .code(1)
        .stderr("Error: terminal i/o failed: stream did not contain valid UTF-8\n");
}

#[test]
fn closed_stdout_ends_quietly() {
    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_primal"))
        .args(["--no-config", "-l", "1000000"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
}

#[test]
fn interactive_end_of_input() {
    primal_no_config()
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: no input"));
}

#[test]
fn preferences_file_is_created_and_honoured() {
    let dir = tempfile::tempdir().unwrap();

    primal()
        .arg("--config-dir")
        .arg(dir.path())
        .args(["-t", "25"])
        .assert()
        .success()
        .stdout("25 is composite.\n");

    let prefs = std::fs::read_to_string(dir.path().join("primal.json")).unwrap();
    assert!(prefs.contains("\"strategy\": \"trial-division\""));

    std::fs::write(
        dir.path().join("primal.json"),
        r#"{ "strategy": "sieve", "retry_notice": false }"#,
    )
    .unwrap();
    primal()
        .env("PRIMAL_CONFIG_DIR", dir.path())
        .args(["-t", "49"])
        .assert()
        .success()
        .stdout("49 is composite.\n");
}

#[test]
fn unreadable_preferences_warn_on_stderr_only() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("primal.json"), "not json").unwrap();

    primal()
        .arg("--config-dir")
        .arg(dir.path())
        .args(["-t", "2"])
        .assert()
        .success()
        .stdout("2 is prime.\n")
        .stderr(
            predicate::str::contains("could not load preferences")
                .and(predicate::str::contains("invalid config"))
                .and(predicate::str::contains("line 1 column")),
        );
}
