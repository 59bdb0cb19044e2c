use super::FileLoader;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, RwLock};

/// In-memory loader, keyed by exact identifier.
///
/// Clones share the same file table, so a loader installed globally can still
/// be updated from a handle kept by the caller.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        if let Ok(mut files) = self.files.write() {
            files.insert(name.into(), content.into());
        }
    }

    pub fn remove(&self, name: &str) -> Option<Vec<u8>> {
        if let Ok(mut files) = self.files.write() {
            files.remove(name)
        } else {
            None
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        if let Ok(files) = self.files.read() {
            files.contains_key(name)
        } else {
            false
        }
    }
}

impl FileLoader for MemoryLoader {
    fn load(&self, name: &str) -> io::Result<Vec<u8>> {
        let files = self
            .files
            .read()
            .map_err(|_| io::Error::other("memory loader lock poisoned"))?;
        files.get(name).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory file named '{}'", name),
            )
        })
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryLoader
where
    K: Into<String>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let loader = MemoryLoader::new();
        for (name, content) in iter {
            loader.insert(name, content);
        }
        loader
    }
}

#[cfg(test)]
#[path = "test_memory.rs"]
mod tests;
