use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_sample_tree(dir: &Path) {
    fs::write(dir.join("root.txt"), "#include \"a.txt\"\n#include \"b.txt\"\n").unwrap();
    fs::write(dir.join("a.txt"), "hello").unwrap();
    fs::write(dir.join("b.txt"), "#include \"a.txt\"\nworld").unwrap();
}

#[test]
fn cli_resolve_prints_expanded_text() {
    let dir = tempdir().expect("create tempdir");
    write_sample_tree(dir.path());

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path()).args(["resolve", "root.txt"]);
    cmd.assert().success().stdout("hello\nworld\n");
}

#[test]
fn cli_resolve_writes_output_file() {
    let dir = tempdir().expect("create tempdir");
    write_sample_tree(dir.path());
    let out = dir.path().join("out.txt");

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path())
        .args(["resolve", "root.txt", "--output"])
        .arg(&out);
    cmd.assert().success().stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&out).unwrap(), "hello\nworld\n");
}

#[test]
fn cli_resolve_reads_from_root_directory() {
    let dir = tempdir().expect("create tempdir");
    let assets = dir.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    write_sample_tree(&assets);

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path())
        .args(["resolve", "root.txt", "--root", "assets"]);
    cmd.assert().success().stdout("hello\nworld\n");
}

#[test]
fn cli_resolve_finds_root_in_parent_directory() {
    let dir = tempdir().expect("create tempdir");
    let assets = dir.path().join("assets");
    let nested = dir.path().join("build/debug");
    fs::create_dir_all(&assets).unwrap();
    fs::create_dir_all(&nested).unwrap();
    write_sample_tree(&assets);

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(&nested)
        .args(["resolve", "root.txt", "--find-root", "assets"]);
    cmd.assert()
        .success()
        .stdout("hello\nworld\n")
        .stderr(predicate::str::contains("[INFO]").and(predicate::str::contains("include root")));
}

#[test]
fn cli_resolve_find_root_without_match_fails() {
    let dir = tempdir().expect("create tempdir");
    write_sample_tree(dir.path());

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path())
        .args(["resolve", "root.txt", "--find-root", "incload-no-such-dir"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("incload-no-such-dir"));
}

#[test]
fn cli_resolve_uses_config_entry() {
    let dir = tempdir().expect("create tempdir");
    let assets = dir.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    write_sample_tree(&assets);
    fs::write(
        dir.path().join("incload.toml"),
        "[paths]\nentry = \"root.txt\"\n\n[loader]\nroot = \"assets\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path()).arg("resolve");
    cmd.assert().success().stdout("hello\nworld\n");
}

#[test]
fn cli_resolve_from_archive() {
    use std::io::Write;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    let dir = tempdir().expect("create tempdir");
    let archive_path = dir.path().join("pack.zip");
    let mut writer = ZipWriter::new(fs::File::create(&archive_path).unwrap());
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, content) in [
        ("main.glsl", "#include \"lib/common.glsl\"\nvoid main() {}\n"),
        ("lib/common.glsl", "float shared;\n"),
    ] {
        writer.start_file(name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path())
        .args(["resolve", "main.glsl", "--archive", "pack.zip"]);
    cmd.assert()
        .success()
        .stdout("float shared;\nvoid main() {}\n");
}

#[test]
fn cli_resolve_missing_include_fails() {
    let dir = tempdir().expect("create tempdir");
    fs::write(dir.path().join("root.txt"), "#include \"missing.txt\"\nbody\n").unwrap();

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path()).args(["resolve", "root.txt"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn cli_resolve_without_entry_fails() {
    let dir = tempdir().expect("create tempdir");

    let mut cmd = Command::cargo_bin("incload").expect("binary not found");
    cmd.current_dir(dir.path()).arg("resolve");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no entry file"));
}
