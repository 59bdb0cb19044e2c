use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_prints_help() {
    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("deps"));
}
