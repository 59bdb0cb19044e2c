//! Text loading with `#include "file"` expansion.
//!
//! All loads go through a swappable [`FileLoader`]; the include resolver
//! expands the directive block at the head of a file, recursively, loading
//! each distinct file at most once.

pub mod language;

// CLI-specific modules (requires terminal, file system, etc.)
#[cfg(feature = "cli")]
pub mod platform;

#[cfg(feature = "cli")]
pub mod tools;

pub use language::preprocessor::loader::{
    FileLoader, MemoryLoader, RawLoader, current_loader, find_upstream_dir, load_file,
    load_file_raw, save_file, set_load_file_function,
};
#[cfg(feature = "cli")]
pub use language::preprocessor::loader::ArchiveLoader;
pub use language::preprocessor::resolver::{
    BlockEnd, DEFAULT_MAX_DEPTH, Expansion, IncludeError, IncludeResolver, load_file_with_includes,
};
