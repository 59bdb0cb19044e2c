use crate::language::preprocessor::loader::{FileLoader, current_loader};
use crate::language::preprocessor::resolver::directive::{HeaderLine, classify_line};
use crate::language::preprocessor::resolver::error::IncludeError;
use std::collections::HashSet;

/// Default nesting limit for includes
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Result of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub text: String,
    /// Every file that was loaded, in first-visit order (root first).
    pub files: Vec<String>,
    /// Where each file's directive block ended, for files that have content.
    pub block_ends: Vec<BlockEnd>,
}

/// First content line of a file, as seen during resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEnd {
    pub file: String,
    /// 1-based
    pub line: usize,
    /// Line text without its terminator
    pub text: String,
}

/// Expands leading `#include "name"` directives through a loader.
///
/// Each identifier is expanded at most once per `resolve` call. Identifiers
/// are compared as plain strings, so `a.txt` and `./a.txt` count as two
/// different files.
pub struct IncludeResolver<'a> {
    loader: &'a dyn FileLoader,
    max_depth: Option<usize>,
}

impl<'a> IncludeResolver<'a> {
    pub fn new(loader: &'a dyn FileLoader) -> Self {
        Self {
            loader,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// `None` removes the limit.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn resolve(&self, root: &str) -> Result<Expansion, IncludeError> {
        let mut state = ResolveState::default();
        self.expand(root, 0, &mut state)?;

        Ok(Expansion {
            text: state.output,
            files: state.order,
            block_ends: state.block_ends,
        })
    }

    fn expand(
        &self,
        name: &str,
        depth: usize,
        state: &mut ResolveState,
    ) -> Result<(), IncludeError> {
        // Already expanded, or being expanded further up the stack
        if state.visited.contains(name) {
            return Ok(());
        }

        if let Some(limit) = self.max_depth {
            if depth > limit {
                return Err(IncludeError::DepthExceeded {
                    file: name.to_string(),
                    limit,
                });
            }
        }

        // Mark before recursing so cycles terminate
        state.visited.insert(name.to_string());
        state.order.push(name.to_string());

        let content = self
            .loader
            .load_text(name)
            .map_err(|source| IncludeError::Unreadable {
                file: name.to_string(),
                source,
            })?;

        let mut rest = content.as_str();
        let mut line_number = 0;
        while !rest.is_empty() {
            let line_end = rest.find('\n').map_or(rest.len(), |i| i + 1);
            let line = &rest[..line_end];
            line_number += 1;

            match classify_line(line) {
                HeaderLine::Blank | HeaderLine::Comment => {
                    state.output.push_str(line);
                }
                HeaderLine::Include(target) => {
                    let before = state.output.len();
                    self.expand(target, depth + 1, state)?;
                    // The included text takes over the directive's own line ending
                    if state.output.len() > before && !state.output.ends_with('\n') {
                        state.output.push_str(line_terminator(line));
                    }
                }
                HeaderLine::Content => {
                    state.block_ends.push(BlockEnd {
                        file: name.to_string(),
                        line: line_number,
                        text: line[..line.len() - line_terminator(line).len()].to_string(),
                    });
                    break;
                }
            }

            rest = &rest[line_end..];
        }

        // First content line and everything after it, verbatim
        state.output.push_str(rest);
        Ok(())
    }
}

fn line_terminator(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

#[derive(Default)]
struct ResolveState {
    visited: HashSet<String>,
    order: Vec<String>,
    block_ends: Vec<BlockEnd>,
    output: String,
}

/// Load `root` through the installed loader and expand its includes.
///
/// The installed loader is read once, so every nested load of this call goes
/// through the same strategy even if another thread installs a new one.
pub fn load_file_with_includes(root: &str) -> Result<String, IncludeError> {
    let loader = current_loader();
    IncludeResolver::new(loader.as_ref())
        .resolve(root)
        .map(|expansion| expansion.text)
}

#[cfg(test)]
#[path = "test_driver.rs"]
mod tests;
