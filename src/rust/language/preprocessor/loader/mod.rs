/// Loader layer - every text load funnels through an installed `FileLoader`
///
/// The installed strategy defaults to [`RawLoader`] (plain file system reads).
/// Applications can redirect all loads to packaged assets, archives or
/// in-memory sources with [`set_load_file_function`] without touching the
/// call sites.
use once_cell::sync::Lazy;
use std::io;
use std::sync::{Arc, RwLock};

#[cfg(feature = "cli")]
pub mod archive;
pub mod memory;
pub mod raw;

#[cfg(feature = "cli")]
pub use archive::ArchiveLoader;
pub use memory::MemoryLoader;
pub use raw::{RawLoader, find_upstream_dir, load_file_raw, save_file};

/// A strategy that reads a named resource into memory.
///
/// Implementations return the complete contents or an error; partial reads
/// must not be reported as success. Any `Fn(&str) -> io::Result<Vec<u8>>`
/// closure that is `Send + Sync` is a loader.
pub trait FileLoader: Send + Sync {
    fn load(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Load a resource and decode it as UTF-8 text.
    fn load_text(&self, name: &str) -> io::Result<String> {
        let bytes = self.load(name)?;
        String::from_utf8(bytes).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("'{}' is not valid UTF-8: {}", name, e),
            )
        })
    }
}

impl<F> FileLoader for F
where
    F: Fn(&str) -> io::Result<Vec<u8>> + Send + Sync,
{
    fn load(&self, name: &str) -> io::Result<Vec<u8>> {
        self(name)
    }
}

/// Process-wide loader used by `load_file`. `None` means the raw loader.
static LOAD_FILE_FUNCTION: Lazy<RwLock<Option<Arc<dyn FileLoader>>>> =
    Lazy::new(|| RwLock::new(None));

/// Install the loader used by [`load_file`] and return the previous one.
///
/// Passing `None` resets to [`RawLoader`]. The returned loader can be passed
/// back in later to restore the earlier behavior.
pub fn set_load_file_function(loader: Option<Arc<dyn FileLoader>>) -> Arc<dyn FileLoader> {
    let mut slot = match LOAD_FILE_FUNCTION.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let previous = std::mem::replace(&mut *slot, loader);
    previous.unwrap_or_else(default_loader)
}

/// Snapshot of the currently installed loader.
pub fn current_loader() -> Arc<dyn FileLoader> {
    let slot = match LOAD_FILE_FUNCTION.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    slot.clone().unwrap_or_else(default_loader)
}

/// Load a text resource through the installed loader.
pub fn load_file(name: &str) -> io::Result<String> {
    current_loader().load_text(name)
}

fn default_loader() -> Arc<dyn FileLoader> {
    Arc::new(RawLoader::new())
}

#[cfg(test)]
#[path = "test_loader.rs"]
mod tests;
