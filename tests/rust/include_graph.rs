use incload::{
    FileLoader, IncludeError, IncludeResolver, MemoryLoader, RawLoader, load_file_with_includes,
    set_load_file_function,
};
use std::fs;
use std::sync::{Arc, Mutex};

// Only this test touches the process-wide loader in this binary.
#[test]
fn installed_loader_serves_every_nested_load() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let root = dir.path().join("root.txt");
    let leaf = dir.path().join("leaf.txt");
    fs::write(&root, format!("#include \"{}\"\nfrom disk\n", leaf.display())).unwrap();
    fs::write(&leaf, "disk leaf\n").unwrap();
    let root_name = root.to_str().unwrap().to_string();
    let leaf_name = leaf.to_str().unwrap().to_string();

    let before = load_file_with_includes(&root_name).unwrap();
    assert_eq!(before, "disk leaf\nfrom disk\n");

    let requested = Arc::new(Mutex::new(Vec::new()));
    let memory = MemoryLoader::new()
        .with_file(root_name.clone(), format!("#include \"{}\"\nfrom memory\n", leaf_name))
        .with_file(leaf_name.clone(), "memory leaf\n");
    let log = Arc::clone(&requested);
    let previous = set_load_file_function(Some(Arc::new(move |name: &str| {
        log.lock().unwrap().push(name.to_string());
        memory.load(name)
    })));

    assert_eq!(
        load_file_with_includes(&root_name).unwrap(),
        "memory leaf\nfrom memory\n"
    );
    assert_eq!(*requested.lock().unwrap(), vec![root_name.clone(), leaf_name.clone()]);

    set_load_file_function(Some(previous));
    assert_eq!(load_file_with_includes(&root_name).unwrap(), before);
}

#[test]
fn rooted_disk_tree_resolves() {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::create_dir_all(dir.path().join("shaders/lib")).unwrap();
    fs::write(
        dir.path().join("shaders/main.frag"),
        "// main shader\n#include \"shaders/lib/light.glsl\"\n#include \"shaders/lib/math.glsl\"\n\nvoid main() {}\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("shaders/lib/light.glsl"),
        "#include \"shaders/lib/math.glsl\"\nvec3 light();\n",
    )
    .unwrap();
    fs::write(dir.path().join("shaders/lib/math.glsl"), "float pi();\n").unwrap();

    let loader = RawLoader::with_root(dir.path());
    let expansion = IncludeResolver::new(&loader)
        .resolve("shaders/main.frag")
        .unwrap();

    assert_eq!(
        expansion.text,
        "// main shader\nfloat pi();\nvec3 light();\n\nvoid main() {}\n"
    );
    assert_eq!(
        expansion.files,
        vec![
            "shaders/main.frag",
            "shaders/lib/light.glsl",
            "shaders/lib/math.glsl"
        ]
    );
}

#[test]
fn unreadable_file_is_reported_with_cause() {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::write(dir.path().join("root"), "#include \"absent\"\n").unwrap();

    let loader = RawLoader::with_root(dir.path());
    let err = IncludeResolver::new(&loader).resolve("root").unwrap_err();

    assert_eq!(err.failed_file(), "absent");
    assert!(matches!(err, IncludeError::Unreadable { .. }));
    assert!(err.to_string().contains("absent"));
    assert!(std::error::Error::source(&err).is_some());
}
