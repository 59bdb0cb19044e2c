use super::FileLoader;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read the whole file at `path`. The returned buffer holds exactly the file
/// contents; no caching or decoding is done.
pub fn load_file_raw(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Write `data` to `path`, replacing any existing contents.
pub fn save_file(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> io::Result<()> {
    fs::write(path, data)
}

/// Walk up from `start` (itself included) and return the first `<ancestor>/<target>`
/// that is a directory. Used to locate an assets folder from inside a build tree.
pub fn find_upstream_dir(start: impl AsRef<Path>, target: impl AsRef<Path>) -> Option<PathBuf> {
    let target = target.as_ref();
    start
        .as_ref()
        .ancestors()
        .map(|ancestor| ancestor.join(target))
        .find(|candidate| candidate.is_dir())
}

/// File system loader, optionally rooted at a base directory
#[derive(Debug, Clone, Default)]
pub struct RawLoader {
    root: Option<PathBuf>,
}

impl RawLoader {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Relative identifiers are joined onto `root`; absolute ones are used as-is.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn resolve_path(&self, name: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl FileLoader for RawLoader {
    fn load(&self, name: &str) -> io::Result<Vec<u8>> {
        load_file_raw(self.resolve_path(name))
    }
}

#[cfg(test)]
#[path = "test_raw.rs"]
mod tests;
