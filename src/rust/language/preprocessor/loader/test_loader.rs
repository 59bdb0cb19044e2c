use super::*;
use std::sync::Mutex;

// Tests in this module swap the process-wide loader; run them one at a time.
static GLOBAL_LOADER_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_closure_is_a_loader() {
    let loader = |name: &str| -> io::Result<Vec<u8>> { Ok(format!("content of {}", name).into_bytes()) };
    assert_eq!(loader.load_text("a.txt").unwrap(), "content of a.txt");
}

#[test]
fn test_load_text_rejects_invalid_utf8() {
    let loader = MemoryLoader::new().with_file("bin.dat", vec![0xff, 0xfe, 0x00]);
    let err = loader.load_text("bin.dat").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    // raw bytes are still available untouched
    assert_eq!(loader.load("bin.dat").unwrap(), vec![0xff, 0xfe, 0x00]);
}

#[test]
fn test_install_returns_previous_and_restores() {
    let _guard = GLOBAL_LOADER_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let memory = MemoryLoader::new().with_file("greeting.txt", "hello");
    let previous = set_load_file_function(Some(Arc::new(memory.clone())));

    assert_eq!(load_file("greeting.txt").unwrap(), "hello");

    // files added through a kept handle are visible to the installed loader
    memory.insert("late.txt", "added later");
    assert_eq!(load_file("late.txt").unwrap(), "added later");

    let replaced = set_load_file_function(Some(previous));
    assert_eq!(replaced.load_text("greeting.txt").unwrap(), "hello");
    assert!(load_file("greeting.txt").is_err());
}

#[test]
fn test_install_none_resets_to_raw_loader() {
    let _guard = GLOBAL_LOADER_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("on_disk.txt");
    std::fs::write(&path, "from disk").expect("write file");
    let path_str = path.to_str().unwrap().to_string();

    let memory = MemoryLoader::new();
    let original = set_load_file_function(Some(Arc::new(memory)));
    assert!(load_file(&path_str).is_err());

    set_load_file_function(None);
    assert_eq!(load_file(&path_str).unwrap(), "from disk");

    set_load_file_function(Some(original));
}

#[test]
fn test_current_loader_is_a_snapshot() {
    let _guard = GLOBAL_LOADER_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let first = MemoryLoader::new().with_file("x", "first");
    let original = set_load_file_function(Some(Arc::new(first)));
    let snapshot = current_loader();

    let second = MemoryLoader::new().with_file("x", "second");
    set_load_file_function(Some(Arc::new(second)));

    assert_eq!(snapshot.load_text("x").unwrap(), "first");
    assert_eq!(load_file("x").unwrap(), "second");

    set_load_file_function(Some(original));
}
