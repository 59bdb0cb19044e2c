// Resolver module - expands leading include directives
pub mod directive;
pub mod driver;
pub mod error;

pub use directive::{HeaderLine, classify_line, is_malformed_include, parse_include};
pub use driver::{BlockEnd, DEFAULT_MAX_DEPTH, Expansion, IncludeResolver, load_file_with_includes};
pub use error::IncludeError;
