/// Preprocessor module - file loading and include expansion
pub mod loader;
pub mod resolver;

pub use loader::{FileLoader, current_loader, load_file, set_load_file_function};
pub use resolver::{Expansion, IncludeError, IncludeResolver, load_file_with_includes};
