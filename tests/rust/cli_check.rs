use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn cli_check_reports_success() {
    let dir = tempdir().expect("create tempdir");
    fs::write(dir.path().join("root.txt"), "#include \"a.txt\"\nroot\n").unwrap();
    fs::write(dir.path().join("a.txt"), "a\n").unwrap();

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path()).args(["check", "root.txt"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("2 file(s)"));
}

#[test]
fn cli_check_names_deep_missing_file() {
    let dir = tempdir().expect("create tempdir");
    fs::write(dir.path().join("root.txt"), "#include \"mid.txt\"\n").unwrap();
    fs::write(dir.path().join("mid.txt"), "#include \"deep/gone.txt\"\n").unwrap();

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path()).args(["check", "root.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("deep/gone.txt"))
        .stderr(predicate::str::contains("reached from: root.txt"));
}

#[test]
fn cli_check_warns_on_malformed_directive() {
    let dir = tempdir().expect("create tempdir");
    fs::write(dir.path().join("root.txt"), "#include <a.txt>\nbody\n").unwrap();

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path()).args(["check", "root.txt"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("root.txt:1"));

    let mut strict = Command::cargo_bin("incload").expect("binary not found");
    strict
        .current_dir(dir.path())
        .args(["check", "root.txt", "--strict"]);
    strict.assert().failure();
}

#[test]
fn cli_check_depth_limit() {
    let dir = tempdir().expect("create tempdir");
    fs::write(dir.path().join("f0"), "#include \"f1\"\n").unwrap();
    fs::write(dir.path().join("f1"), "#include \"f2\"\n").unwrap();
    fs::write(dir.path().join("f2"), "leaf\n").unwrap();

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path())
        .args(["check", "f0", "--max-depth", "1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("depth limit"));

    let mut unlimited = Command::cargo_bin("incload").expect("binary not found");
    unlimited
        .current_dir(dir.path())
        .args(["check", "f0", "--max-depth", "0"]);
    unlimited.assert().success();
}

#[test]
fn cli_deps_lists_files_in_visit_order() {
    let dir = tempdir().expect("create tempdir");
    fs::write(
        dir.path().join("root.txt"),
        "#include \"b.txt\"\n#include \"a.txt\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("a.txt"), "a\n").unwrap();
    fs::write(dir.path().join("b.txt"), "#include \"a.txt\"\nb\n").unwrap();

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path()).args(["deps", "root.txt"]);
    cmd.assert().success().stdout("root.txt\nb.txt\na.txt\n");
}
