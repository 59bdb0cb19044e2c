use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::platform::config::AppConfig;
use crate::tools::logger::Logger;

#[derive(Clone)]
pub struct CliContext {
    logger: Arc<Logger>,
    config: Arc<AppConfig>,
    cwd: PathBuf,
}

impl CliContext {
    pub fn new(verbose: bool) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        let config = AppConfig::load(&cwd)?;
        Ok(Self::with_config(config, cwd, verbose))
    }

    pub fn with_config(config: AppConfig, cwd: PathBuf, verbose: bool) -> Self {
        Self {
            logger: Arc::new(Logger::with_verbose(verbose)),
            config: Arc::new(config),
            cwd,
        }
    }

    pub fn logger(&self) -> Arc<Logger> {
        Arc::clone(&self.logger)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}
