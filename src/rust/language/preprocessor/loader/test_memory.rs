use super::*;

#[test]
fn test_memory_loader_serves_inserted_files() {
    let loader = MemoryLoader::new().with_file("a.txt", "alpha");
    loader.insert("b.txt", vec![0u8, 1, 2]);

    assert_eq!(loader.load_text("a.txt").unwrap(), "alpha");
    assert_eq!(loader.load("b.txt").unwrap(), vec![0u8, 1, 2]);

    let err = loader.load("c.txt").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert!(err.to_string().contains("c.txt"));
}

#[test]
fn test_memory_loader_remove_and_contains() {
    let loader = MemoryLoader::new().with_file("a.txt", "alpha");
    assert!(loader.contains("a.txt"));
    assert!(!loader.contains("./a.txt"));

    assert_eq!(loader.remove("a.txt"), Some(b"alpha".to_vec()));
    assert_eq!(loader.remove("a.txt"), None);
    assert!(!loader.contains("a.txt"));
    assert_eq!(loader.load("a.txt").unwrap_err().kind(), io::ErrorKind::NotFound);
}

#[test]
fn test_memory_loader_collects_from_pairs() {
    let loader: MemoryLoader = [("root", "#include \"leaf\"\n"), ("leaf", "leaf\n")]
        .into_iter()
        .collect();

    assert!(loader.contains("root"));
    assert!(loader.contains("leaf"));
    assert_eq!(loader.load_text("leaf").unwrap(), "leaf\n");
}

#[test]
fn test_memory_loader_clones_share_files() {
    let loader = MemoryLoader::new();
    let handle = loader.clone();

    handle.insert("late.txt", "added later");
    assert_eq!(loader.load_text("late.txt").unwrap(), "added later");

    loader.remove("late.txt");
    assert!(!handle.contains("late.txt"));
}
