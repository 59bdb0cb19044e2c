use std::time::Instant;

use anyhow::{Result, anyhow};
use clap::Args;

use super::{LoaderArgs, report_include_error};
use crate::language::preprocessor::resolver::{Expansion, is_malformed_include};
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub loader: LoaderArgs,

    /// Treat include-like lines that stop directive scanning as errors
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

/// A line that looks like an include but ends the directive block instead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspiciousLine {
    pub file: String,
    pub line: usize,
    pub text: String,
}

impl CheckCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();
        let start = Instant::now();

        logger.action(format!("Checking '{}'...", self.loader.entry(ctx)?));
        let (entry, result) = self.loader.resolve(ctx)?;

        let expansion = match result {
            Ok(expansion) => expansion,
            Err(e) => {
                report_include_error(&logger, &entry, &e);
                return Err(anyhow!("include check failed for '{}'", entry));
            }
        };

        let suspicious = find_malformed_directives(&expansion);

        for found in &suspicious {
            logger.warn(format!(
                "{}:{}: '{}' looks like an include but is treated as content",
                found.file,
                found.line,
                found.text.trim()
            ));
        }

        if self.strict && !suspicious.is_empty() {
            logger.error(format!(
                "Check failed with {} malformed directive(s) in {:.2?}",
                suspicious.len(),
                start.elapsed()
            ));
            return Err(anyhow!("malformed include directives detected"));
        }

        logger.success(format!(
            "No errors detected. Resolved {} file(s) in {:.2?}",
            expansion.files.len(),
            start.elapsed()
        ));
        Ok(())
    }
}

/// Lines that ended a directive block while reading like an include.
pub fn find_malformed_directives(expansion: &Expansion) -> Vec<SuspiciousLine> {
    expansion
        .block_ends
        .iter()
        .filter(|end| is_malformed_include(&end.text))
        .map(|end| SuspiciousLine {
            file: end.file.clone(),
            line: end.line,
            text: end.text.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::preprocessor::loader::MemoryLoader;
    use crate::language::preprocessor::resolver::IncludeResolver;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_finds_malformed_directive_ending_the_block() {
        let loader = MemoryLoader::new()
            .with_file(
                "root.glsl",
                "// header\n#include \"a\"\n#include <b>\n#include \"c\"\n",
            )
            .with_file("a", "int a;\n");
        let expansion = IncludeResolver::new(&loader).resolve("root.glsl").unwrap();

        let found = find_malformed_directives(&expansion);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file, "root.glsl");
        assert_eq!(found[0].line, 3);
        assert_eq!(found[0].text, "#include <b>");
    }

    #[test]
    fn test_ignores_ordinary_content() {
        let loader = MemoryLoader::new()
            .with_file("f", "#include \"a\"\nint x;\n# include \"b\"\n")
            .with_file("a", "#include \"f\"\n");
        let expansion = IncludeResolver::new(&loader).resolve("f").unwrap();

        assert!(find_malformed_directives(&expansion).is_empty());
    }

    #[test]
    fn test_reports_what_was_resolved_not_a_later_read() {
        let reads = AtomicUsize::new(0);
        let loader = |name: &str| -> io::Result<Vec<u8>> {
            assert_eq!(name, "root");
            let body: &[u8] = match reads.fetch_add(1, Ordering::SeqCst) {
                0 => b"#include <first>\n",
                _ => b"#include <second>\n",
            };
            Ok(body.to_vec())
        };
        let expansion = IncludeResolver::new(&loader).resolve("root").unwrap();

        let found = find_malformed_directives(&expansion);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "#include <first>");
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }
}
