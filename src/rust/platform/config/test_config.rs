use super::*;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.max_depth(), Some(DEFAULT_MAX_DEPTH));
    assert!(config.loader_root(dir.path()).is_none());
    // no default file is written
    assert!(!dir.path().join(TOML_CONFIG).exists());
}

#[test]
fn test_toml_overrides() {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::write(
        dir.path().join(TOML_CONFIG),
        r#"
[paths]
entry = "shaders/main.glsl"

[loader]
root = "assets"

[resolver]
max_depth = 8
"#,
    )
    .unwrap();

    let config = AppConfig::load(dir.path()).unwrap();
    assert_eq!(config.paths.entry, Some(PathBuf::from("shaders/main.glsl")));
    assert_eq!(config.paths.output, None);
    assert_eq!(config.max_depth(), Some(8));
    assert_eq!(config.loader_root(dir.path()), Some(dir.path().join("assets")));
    assert!(config.archive_path(dir.path()).is_none());
}

#[test]
fn test_zero_depth_means_unlimited() {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::write(dir.path().join(TOML_CONFIG), "[resolver]\nmax_depth = 0\n").unwrap();

    let config = AppConfig::load(dir.path()).unwrap();
    assert_eq!(config.max_depth(), None);
}

#[test]
fn test_json_config() {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::write(
        dir.path().join(JSON_CONFIG),
        r#"{ "loader": { "archive": "pack.zip" } }"#,
    )
    .unwrap();

    let config = AppConfig::load(dir.path()).unwrap();
    assert_eq!(config.archive_path(dir.path()), Some(dir.path().join("pack.zip")));
    assert_eq!(config.resolver.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn test_toml_preferred_over_json() {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::write(dir.path().join(TOML_CONFIG), "[resolver]\nmax_depth = 3\n").unwrap();
    fs::write(dir.path().join(JSON_CONFIG), r#"{ "resolver": { "max_depth": 5 } }"#).unwrap();

    assert_eq!(AppConfig::load(dir.path()).unwrap().max_depth(), Some(3));
}

#[test]
fn test_invalid_config_names_the_file() {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::write(dir.path().join(TOML_CONFIG), "[resolver\nmax_depth = ").unwrap();

    let err = AppConfig::load(dir.path()).unwrap_err();
    assert!(format!("{err}").contains(TOML_CONFIG));
}
