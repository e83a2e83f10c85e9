use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("charter")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--api-base"));
}

#[test]
fn test_ask_help_mentions_stdin() {
    cargo_bin_cmd!("charter")
        .args(["ask", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("QUESTION"))
        .stdout(predicate::str::contains("stdin"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("charter")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("charter"));
}

#[test]
fn test_unknown_command_fails() {
    cargo_bin_cmd!("charter")
        .arg("frobnicate")
        .assert()
        .failure();
}
