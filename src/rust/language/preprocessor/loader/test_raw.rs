use super::*;

#[test]
fn test_load_file_raw_reads_exact_bytes() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("data.bin");
    let bytes = vec![0u8, 1, 2, 255, b'\r', b'\n'];
    std::fs::write(&path, &bytes).expect("write file");

    assert_eq!(load_file_raw(&path).unwrap(), bytes);
}

#[test]
fn test_load_file_raw_missing_file_fails() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let err = load_file_raw(dir.path().join("absent.txt")).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn test_save_file_overwrites() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("out.txt");

    save_file(&path, "a much longer first version").unwrap();
    save_file(&path, "short").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
}

#[test]
fn test_rooted_loader_joins_relative_names() {
    let dir = tempfile::tempdir().expect("create tempdir");
    std::fs::create_dir_all(dir.path().join("shaders")).unwrap();
    std::fs::write(dir.path().join("shaders/common.glsl"), "float x;").unwrap();

    let loader = RawLoader::with_root(dir.path());
    assert_eq!(loader.root(), Some(dir.path()));
    assert_eq!(loader.load_text("shaders/common.glsl").unwrap(), "float x;");
}

#[test]
fn test_rooted_loader_keeps_absolute_names() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let other = tempfile::tempdir().expect("create tempdir");
    let absolute = other.path().join("abs.txt");
    std::fs::write(&absolute, "absolute").unwrap();

    let loader = RawLoader::with_root(dir.path());
    assert_eq!(loader.load_text(absolute.to_str().unwrap()).unwrap(), "absolute");
}

#[test]
fn test_find_upstream_dir_walks_up_to_target() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let assets = dir.path().join("assets");
    let deep = dir.path().join("build/debug/bin");
    std::fs::create_dir_all(&assets).unwrap();
    std::fs::create_dir_all(&deep).unwrap();

    assert_eq!(find_upstream_dir(&deep, "assets"), Some(assets.clone()));
    assert_eq!(find_upstream_dir(dir.path(), "assets"), Some(assets));
}

#[test]
fn test_find_upstream_dir_prefers_nearest_match() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let inner = dir.path().join("game/assets");
    std::fs::create_dir_all(dir.path().join("assets")).unwrap();
    std::fs::create_dir_all(&inner).unwrap();

    assert_eq!(find_upstream_dir(dir.path().join("game"), "assets"), Some(inner));
}

#[test]
fn test_find_upstream_dir_ignores_plain_files() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let deep = dir.path().join("a/b");
    std::fs::create_dir_all(&deep).unwrap();
    std::fs::write(dir.path().join("a/incload-missing-assets"), "not a dir").unwrap();

    assert_eq!(find_upstream_dir(&deep, "incload-missing-assets"), None);
}
