pub mod check;
pub mod deps;
pub mod resolve;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Args;

use crate::language::preprocessor::loader::{
    ArchiveLoader, FileLoader, RawLoader, current_loader, find_upstream_dir,
    set_load_file_function,
};
use crate::language::preprocessor::resolver::{Expansion, IncludeError, IncludeResolver};
use crate::tools::cli::state::CliContext;
use crate::tools::logger::{LogLevel, Logger};

/// Options shared by every command that resolves a file
#[derive(Debug, Clone, Args)]
pub struct LoaderArgs {
    /// Root file to resolve (defaults to `paths.entry` from incload.toml)
    pub entry: Option<String>,

    /// Directory relative include names are read from
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Read every file from this zip archive instead of the file system
    #[arg(long, conflicts_with = "root")]
    pub archive: Option<PathBuf>,

    /// Use the nearest directory with this name, searching up from the current one
    #[arg(long, value_name = "DIR", conflicts_with_all = ["root", "archive"])]
    pub find_root: Option<String>,

    /// Maximum include nesting depth (0 = unlimited)
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl LoaderArgs {
    pub fn entry(&self, ctx: &CliContext) -> Result<String> {
        if let Some(entry) = &self.entry {
            return Ok(entry.clone());
        }
        ctx.config()
            .paths
            .entry
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("no entry file given and none set in incload.toml"))
    }

    pub fn max_depth(&self, ctx: &CliContext) -> Option<usize> {
        match self.max_depth {
            Some(0) => None,
            Some(depth) => Some(depth),
            None => ctx.config().max_depth(),
        }
    }

    /// Build the loader selected by flags, falling back to the config file.
    pub fn build_loader(&self, ctx: &CliContext) -> Result<Arc<dyn FileLoader>> {
        if let Some(name) = &self.find_root {
            let root = find_upstream_dir(ctx.cwd(), name).ok_or_else(|| {
                anyhow!(
                    "no '{}' directory found in {} or any parent",
                    name,
                    ctx.cwd().display()
                )
            })?;
            ctx.logger()
                .info(format!("Using {} as include root", root.display()));
            return Ok(Arc::new(RawLoader::with_root(root)));
        }

        let config = ctx.config();
        let archive = self
            .archive
            .clone()
            .or_else(|| config.archive_path(ctx.cwd()));

        if let Some(path) = archive {
            let loader = ArchiveLoader::open(&path)
                .with_context(|| format!("failed to open archive {}", path.display()))?;
            return Ok(Arc::new(loader));
        }

        let root = self.root.clone().or_else(|| config.loader_root(ctx.cwd()));
        Ok(match root {
            Some(root) => Arc::new(RawLoader::with_root(root)),
            None => Arc::new(RawLoader::new()),
        })
    }

    /// Install the selected loader process-wide, then resolve the entry.
    pub fn resolve(&self, ctx: &CliContext) -> Result<(String, Result<Expansion, IncludeError>)> {
        let entry = self.entry(ctx)?;
        set_load_file_function(Some(self.build_loader(ctx)?));

        let loader = current_loader();
        let resolver = IncludeResolver::new(loader.as_ref()).with_max_depth(self.max_depth(ctx));
        ctx.logger().debug(format!(
            "Resolving '{}' (max depth: {})",
            entry,
            resolver
                .max_depth()
                .map_or_else(|| "unlimited".to_string(), |d| d.to_string())
        ));

        let result = resolver.resolve(&entry);
        Ok((entry, result))
    }
}

pub fn report_include_error(logger: &Logger, entry: &str, error: &IncludeError) {
    let mut details = vec![format!("file: {}", error.failed_file())];
    if let IncludeError::Unreadable { source, .. } = error {
        details.push(format!("cause: {}", source));
    }
    if error.failed_file() != entry {
        details.push(format!("reached from: {}", entry));
    }
    logger.log_with_details(LogLevel::Error, error.to_string(), details);
}
