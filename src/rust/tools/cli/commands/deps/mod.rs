use std::io::Write;

use anyhow::{Context, Result, anyhow};
use clap::Args;

use super::{LoaderArgs, report_include_error};
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct DepsCommand {
    #[command(flatten)]
    pub loader: LoaderArgs,
}

impl DepsCommand {
    /// Print every loaded file, root first, in the order it was reached.
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();

        let (entry, result) = self.loader.resolve(ctx)?;
        let expansion = match result {
            Ok(expansion) => expansion,
            Err(e) => {
                report_include_error(&logger, &entry, &e);
                return Err(anyhow!("failed to resolve '{}'", entry));
            }
        };

        let mut stdout = std::io::stdout().lock();
        for file in &expansion.files {
            writeln!(stdout, "{}", file).context("failed to write to stdout")?;
        }

        Ok(())
    }
}
