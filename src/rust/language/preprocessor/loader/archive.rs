use super::FileLoader;
use std::fs::File;
use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use zip::ZipArchive;
use zip::result::ZipError;

/// Upper bound on the buffer reserved from an entry's declared size
const MAX_PREALLOCATION: usize = 1 << 20;

/// Loader backed by a zip archive; identifiers are entry names inside it.
pub struct ArchiveLoader<R = File> {
    source: PathBuf,
    archive: Mutex<ZipArchive<R>>,
}

impl ArchiveLoader<File> {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let archive = ZipArchive::new(file).map_err(zip_to_io)?;
        Ok(Self {
            source: path.to_path_buf(),
            archive: Mutex::new(archive),
        })
    }
}

impl<R: Read + Seek> ArchiveLoader<R> {
    /// Wrap an already opened archive stream. `source` is only used in messages.
    pub fn from_reader(reader: R, source: impl Into<PathBuf>) -> io::Result<Self> {
        let archive = ZipArchive::new(reader).map_err(zip_to_io)?;
        Ok(Self {
            source: source.into(),
            archive: Mutex::new(archive),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn entry_names(&self) -> Vec<String> {
        match self.archive.lock() {
            Ok(archive) => archive.file_names().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl<R: Read + Seek + Send> FileLoader for ArchiveLoader<R> {
    fn load(&self, name: &str) -> io::Result<Vec<u8>> {
        let mut archive = self
            .archive
            .lock()
            .map_err(|_| io::Error::other("archive lock poisoned"))?;
        let mut entry = archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{}' not found in {}", name, self.source.display()),
            ),
            other => zip_to_io(other),
        })?;

        // The declared size comes from the archive and is not trusted
        let hint = usize::try_from(entry.size()).map_or(0, |n| n.min(MAX_PREALLOCATION));
        let mut buffer = Vec::with_capacity(hint);
        entry.read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

fn zip_to_io(err: ZipError) -> io::Error {
    match err {
        ZipError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidData, other),
    }
}

#[cfg(test)]
#[path = "test_archive.rs"]
mod tests;
