//! Smoke tests for the `drey` binary surface: argument parsing only, no
//! server is actually started.

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

fn drey_cmd() -> Command {
    Command::new(cargo_bin("drey"))
}

#[test]
fn help_describes_the_service() {
    drey_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("squirrel registry"))
        .stdout(predicate::str::contains("--data"))
        .stdout(predicate::str::contains("--listen"));
}

#[test]
fn data_argument_is_required() {
    drey_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--data"));
}

#[test]
fn invalid_listen_address_is_rejected() {
    drey_cmd()
        .args(["--data", "squirrels.json", "--listen", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-an-address"));
}
