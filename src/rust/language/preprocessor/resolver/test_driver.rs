use super::*;
use crate::language::preprocessor::loader::MemoryLoader;
use std::io;
use std::sync::Mutex;

fn resolve(loader: &MemoryLoader, root: &str) -> Result<String, IncludeError> {
    IncludeResolver::new(loader).resolve(root).map(|e| e.text)
}

#[test]
fn test_no_includes_is_verbatim() {
    let loader = MemoryLoader::new().with_file("plain.txt", "line one\r\nline two");
    assert_eq!(resolve(&loader, "plain.txt").unwrap(), "line one\r\nline two");
}

#[test]
fn test_shared_include_expanded_once() {
    let loader = MemoryLoader::new()
        .with_file("root.txt", "#include \"a.txt\"\n#include \"b.txt\"")
        .with_file("a.txt", "hello")
        .with_file("b.txt", "#include \"a.txt\"\nworld");

    assert_eq!(resolve(&loader, "root.txt").unwrap(), "hello\nworld");
}

#[test]
fn test_last_line_directive_adds_no_line_ending() {
    let loader = MemoryLoader::new()
        .with_file("root", "#include \"a\"")
        .with_file("a", "A");

    assert_eq!(resolve(&loader, "root").unwrap(), "A");
}

#[test]
fn test_crlf_directive_keeps_crlf() {
    let loader = MemoryLoader::new()
        .with_file("crlf", "#include \"a\"\r\nbody\r\n")
        .with_file("a", "A");

    assert_eq!(resolve(&loader, "crlf").unwrap(), "A\r\nbody\r\n");
}

#[test]
fn test_nested_includes_substitute_in_place() {
    let loader = MemoryLoader::new()
        .with_file("main.glsl", "#include \"common.glsl\"\nvoid main() {}\n")
        .with_file("common.glsl", "#include \"math.glsl\"\nfloat common;\n")
        .with_file("math.glsl", "float pi = 3.14;\n");

    assert_eq!(
        resolve(&loader, "main.glsl").unwrap(),
        "float pi = 3.14;\nfloat common;\nvoid main() {}\n"
    );
}

#[test]
fn test_blank_and_comment_lines_do_not_stop_scanning() {
    let loader = MemoryLoader::new()
        .with_file(
            "root",
            "// header comment\n\n   \n#include \"a\"\n  // another\n#include \"b\"\nbody\n",
        )
        .with_file("a", "A\n")
        .with_file("b", "B\n");

    assert_eq!(
        resolve(&loader, "root").unwrap(),
        "// header comment\n\n   \nA\n  // another\nB\nbody\n"
    );
}

#[test]
fn test_scanning_stops_at_first_content_line() {
    let loader = MemoryLoader::new()
        .with_file("root", "#include \"a\"\ncode();\n#include \"b\"\n")
        .with_file("a", "A\n");

    // "b" is never loaded: the directive after code is plain text
    assert_eq!(
        resolve(&loader, "root").unwrap(),
        "A\ncode();\n#include \"b\"\n"
    );
}

#[test]
fn test_malformed_directive_is_content() {
    let loader = MemoryLoader::new()
        .with_file("angle", "#include <a>\n#include \"a\"\n")
        .with_file("spaced", "# include \"a\"\n#include \"a\"\n")
        .with_file("a", "A\n");

    assert_eq!(
        resolve(&loader, "angle").unwrap(),
        "#include <a>\n#include \"a\"\n"
    );
    assert_eq!(
        resolve(&loader, "spaced").unwrap(),
        "# include \"a\"\n#include \"a\"\n"
    );
}

#[test]
fn test_self_include_terminates() {
    let loader = MemoryLoader::new().with_file("self", "#include \"self\"\nonce\n");
    assert_eq!(resolve(&loader, "self").unwrap(), "once\n");
}

#[test]
fn test_mutual_cycle_terminates() {
    let loader = MemoryLoader::new()
        .with_file("A", "#include \"B\"\nA content\n")
        .with_file("B", "#include \"A\"\nB content\n");

    assert_eq!(resolve(&loader, "A").unwrap(), "B content\nA content\n");
    assert_eq!(resolve(&loader, "B").unwrap(), "A content\nB content\n");
}

#[test]
fn test_include_only_file_contributes_its_includes() {
    let loader = MemoryLoader::new()
        .with_file("bundle", "#include \"x\"\n#include \"y\"\n")
        .with_file("x", "X")
        .with_file("y", "Y");

    assert_eq!(resolve(&loader, "bundle").unwrap(), "X\nY\n");
}

#[test]
fn test_empty_include_adds_nothing() {
    let loader = MemoryLoader::new()
        .with_file("root", "#include \"empty\"\nafter\n")
        .with_file("empty", "");

    assert_eq!(resolve(&loader, "root").unwrap(), "after\n");
}

#[test]
fn test_missing_root_reports_root() {
    let loader = MemoryLoader::new();
    let err = resolve(&loader, "nowhere.txt").unwrap_err();
    assert!(err.is_unreadable());
    assert_eq!(err.failed_file(), "nowhere.txt");
}

#[test]
fn test_deep_missing_file_is_reported() {
    let loader = MemoryLoader::new()
        .with_file("root", "#include \"l1\"\n#include \"sibling\"\n")
        .with_file("l1", "#include \"l2\"\n")
        .with_file("l2", "#include \"gone\"\n")
        .with_file("sibling", "S\n");

    let err = resolve(&loader, "root").unwrap_err();
    assert_eq!(err.failed_file(), "gone");
    match err {
        IncludeError::Unreadable { source, .. } => {
            assert_eq!(source.kind(), io::ErrorKind::NotFound)
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_utf8_include_is_unreadable() {
    let loader = MemoryLoader::new()
        .with_file("root", "#include \"binary.dat\"\nbody\n")
        .with_file("binary.dat", vec![0xff, 0xfe, 0x00]);

    let err = resolve(&loader, "root").unwrap_err();
    assert_eq!(err.failed_file(), "binary.dat");
    match err {
        IncludeError::Unreadable { source, .. } => {
            assert_eq!(source.kind(), io::ErrorKind::InvalidData)
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_first_failure_aborts_remaining_siblings() {
    let requested = Mutex::new(Vec::new());
    let loader = |name: &str| -> io::Result<Vec<u8>> {
        requested.lock().unwrap().push(name.to_string());
        match name {
            "root" => Ok(b"#include \"bad\"\n#include \"later\"\n".to_vec()),
            "later" => Ok(b"L\n".to_vec()),
            _ => Err(io::Error::new(io::ErrorKind::NotFound, "missing")),
        }
    };

    let err = IncludeResolver::new(&loader).resolve("root").unwrap_err();
    assert_eq!(err.failed_file(), "bad");
    assert_eq!(*requested.lock().unwrap(), vec!["root", "bad"]);
}

#[test]
fn test_each_file_loaded_once() {
    let requested = Mutex::new(Vec::new());
    let loader = |name: &str| -> io::Result<Vec<u8>> {
        requested.lock().unwrap().push(name.to_string());
        let body = match name {
            "root" => "#include \"a\"\n#include \"b\"\n#include \"a\"\n",
            "a" => "#include \"c\"\nA\n",
            "b" => "#include \"c\"\n#include \"a\"\nB\n",
            "c" => "C\n",
            _ => return Err(io::Error::new(io::ErrorKind::NotFound, "missing")),
        };
        Ok(body.as_bytes().to_vec())
    };

    let expansion = IncludeResolver::new(&loader).resolve("root").unwrap();
    assert_eq!(expansion.text, "C\nA\nB\n");
    assert_eq!(expansion.files, vec!["root", "a", "c", "b"]);
    assert_eq!(*requested.lock().unwrap(), vec!["root", "a", "c", "b"]);
}

#[test]
fn test_identifiers_are_not_normalized() {
    let loader = MemoryLoader::new()
        .with_file("root", "#include \"a.txt\"\n#include \"./a.txt\"\n")
        .with_file("a.txt", "A\n")
        .with_file("./a.txt", "A\n");

    assert_eq!(resolve(&loader, "root").unwrap(), "A\nA\n");
}

#[test]
fn test_depth_limit() {
    let loader = MemoryLoader::new()
        .with_file("f0", "#include \"f1\"\n")
        .with_file("f1", "#include \"f2\"\n")
        .with_file("f2", "#include \"f3\"\n")
        .with_file("f3", "leaf\n");

    let err = IncludeResolver::new(&loader)
        .with_max_depth(Some(2))
        .resolve("f0")
        .unwrap_err();
    assert_eq!(err.failed_file(), "f3");
    assert!(matches!(err, IncludeError::DepthExceeded { limit: 2, .. }));

    let ok = IncludeResolver::new(&loader)
        .with_max_depth(Some(3))
        .resolve("f0")
        .unwrap();
    assert_eq!(ok.text, "leaf\n");

    let unbounded = IncludeResolver::new(&loader).with_max_depth(None);
    assert_eq!(unbounded.max_depth(), None);
    assert_eq!(unbounded.resolve("f0").unwrap().text, "leaf\n");
}

#[test]
fn test_default_max_depth() {
    let loader = MemoryLoader::new();
    assert_eq!(
        IncludeResolver::new(&loader).max_depth(),
        Some(DEFAULT_MAX_DEPTH)
    );
}

#[test]
fn test_block_ends_record_first_content_line() {
    let loader = MemoryLoader::new()
        .with_file("root", "// header\r\n#include \"a\"\r\n#include <b>\r\nrest\r\n")
        .with_file("a", "#include \"root\"\n");

    let expansion = IncludeResolver::new(&loader).resolve("root").unwrap();
    assert_eq!(
        expansion.block_ends,
        vec![BlockEnd {
            file: "root".to_string(),
            line: 3,
            text: "#include <b>".to_string(),
        }]
    );
}
