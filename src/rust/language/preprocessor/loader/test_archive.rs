use super::*;
use crate::language::preprocessor::IncludeResolver;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn build_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, content) in entries {
        writer.start_file(*name, options).expect("start entry");
        writer.write_all(content.as_bytes()).expect("write entry");
    }
    writer.finish().expect("finish archive").into_inner()
}

#[test]
fn test_archive_loader_reads_entries() {
    let bytes = build_archive(&[("shaders/a.glsl", "void a();"), ("b.txt", "bee")]);
    let loader = ArchiveLoader::from_reader(Cursor::new(bytes), "assets.zip").unwrap();

    assert_eq!(loader.load_text("shaders/a.glsl").unwrap(), "void a();");
    assert_eq!(loader.load_text("b.txt").unwrap(), "bee");

    let mut names = loader.entry_names();
    names.sort();
    assert_eq!(names, vec!["b.txt".to_string(), "shaders/a.glsl".to_string()]);
}

#[test]
fn test_archive_loader_missing_entry_is_not_found() {
    let bytes = build_archive(&[("present.txt", "here")]);
    let loader = ArchiveLoader::from_reader(Cursor::new(bytes), "assets.zip").unwrap();

    let err = loader.load("absent.txt").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert!(err.to_string().contains("assets.zip"));
}

#[test]
fn test_archive_loader_opens_from_disk() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("pack.zip");
    std::fs::write(&path, build_archive(&[("root.txt", "packed")])).unwrap();

    let loader = ArchiveLoader::open(&path).unwrap();
    assert_eq!(loader.source(), path.as_path());
    assert_eq!(loader.load_text("root.txt").unwrap(), "packed");
}

#[test]
fn test_archive_loader_rejects_garbage() {
    let result = ArchiveLoader::from_reader(Cursor::new(b"not a zip".to_vec()), "junk.zip");
    assert!(result.is_err());
}

/// Overwrite every zip64 uncompressed-size field that currently holds `actual`.
fn patch_zip64_sizes(bytes: &mut [u8], actual: u64, declared: u64) -> usize {
    let mut patched = 0;
    let mut i = 0;
    while i + 12 <= bytes.len() {
        // extra field id 0x0001, then a u16 length, then the uncompressed size
        let is_zip64_field = bytes[i] == 0x01 && bytes[i + 1] == 0x00 && bytes[i + 3] == 0x00;
        if is_zip64_field && bytes[i + 4..i + 12] == actual.to_le_bytes() {
            bytes[i + 4..i + 12].copy_from_slice(&declared.to_le_bytes());
            patched += 1;
            i += 12;
        } else {
            i += 1;
        }
    }
    patched
}

#[test]
fn test_archive_loader_survives_huge_declared_size() {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .large_file(true);
    writer.start_file("a.txt", options).expect("start entry");
    writer.write_all(b"hello").expect("write entry");
    let mut bytes = writer.finish().expect("finish archive").into_inner();

    assert!(patch_zip64_sizes(&mut bytes, 5, u64::MAX - 1) > 0);

    // A lying header may fail to open or to load, but never aborts the process
    let Ok(loader) = ArchiveLoader::from_reader(Cursor::new(bytes), "evil.zip") else {
        return;
    };
    if let Ok(content) = loader.load("a.txt") {
        assert_eq!(content, b"hello");
    }

    match IncludeResolver::new(&loader).resolve("a.txt") {
        Ok(expansion) => assert_eq!(expansion.text, "hello"),
        Err(e) => assert_eq!(e.failed_file(), "a.txt"),
    }
}
