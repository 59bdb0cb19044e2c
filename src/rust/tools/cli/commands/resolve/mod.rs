use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use clap::Args;

use super::{LoaderArgs, report_include_error};
use crate::language::preprocessor::loader::save_file;
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub loader: LoaderArgs,

    /// Write the expanded text here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ResolveCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();
        let start = Instant::now();

        let (entry, result) = self.loader.resolve(ctx)?;
        let expansion = match result {
            Ok(expansion) => expansion,
            Err(e) => {
                report_include_error(&logger, &entry, &e);
                return Err(anyhow!("failed to resolve '{}'", entry));
            }
        };

        let output = self
            .output
            .clone()
            .or_else(|| ctx.config().paths.output.as_ref().map(|p| ctx.cwd().join(p)));

        match output {
            Some(path) => {
                save_file(&path, &expansion.text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                logger.success(format!(
                    "Resolved '{}' ({} file(s)) into {} in {:.2?}",
                    entry,
                    expansion.files.len(),
                    path.display(),
                    start.elapsed()
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(expansion.text.as_bytes())
                    .context("failed to write to stdout")?;
                stdout.flush().context("failed to flush stdout")?;
                logger.debug(format!(
                    "Resolved '{}' ({} file(s)) in {:.2?}",
                    entry,
                    expansion.files.len(),
                    start.elapsed()
                ));
            }
        }

        Ok(())
    }
}
