use once_cell::sync::Lazy;
use regex::Regex;

/// Exact directive form: `#include "name"`, one space, no quote in the name.
static INCLUDE_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^#include "([^"]+)"$"#).expect("valid include pattern"));

/// Anything that reads like an include attempt, well-formed or not.
static INCLUDE_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#\s*include\b").expect("valid include-like pattern"));

/// Classification of a line in the directive block at the head of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    Blank,
    Comment,
    Include(&'a str),
    /// First real content; ends directive scanning.
    Content,
}

pub fn classify_line(line: &str) -> HeaderLine<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return HeaderLine::Blank;
    }
    if trimmed.starts_with("//") {
        return HeaderLine::Comment;
    }
    match parse_include(trimmed) {
        Some(name) => HeaderLine::Include(name),
        None => HeaderLine::Content,
    }
}

/// Extract the file name from an include directive, if `line` is one.
pub fn parse_include(line: &str) -> Option<&str> {
    INCLUDE_DIRECTIVE
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// True for lines that look like an include but do not match the exact form,
/// e.g. `#include <x>` or `# include "x"`.
pub fn is_malformed_include(line: &str) -> bool {
    let trimmed = line.trim();
    INCLUDE_LIKE.is_match(trimmed) && parse_include(trimmed).is_none()
}

#[cfg(test)]
#[path = "test_directive.rs"]
mod tests;
