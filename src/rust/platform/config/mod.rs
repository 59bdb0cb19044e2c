use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::language::preprocessor::resolver::DEFAULT_MAX_DEPTH;

pub const TOML_CONFIG: &str = "incload.toml";
pub const JSON_CONFIG: &str = "incload.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsSection,
    pub loader: LoaderSection,
    pub resolver: ResolverSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsSection {
    /// Root file resolved when the CLI is given no entry
    pub entry: Option<PathBuf>,
    /// Where `resolve` writes its output; stdout when unset
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoaderSection {
    /// Base directory relative identifiers are read from
    pub root: Option<PathBuf>,
    /// Zip archive to load from instead of the file system
    pub archive: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolverSection {
    /// 0 disables the limit.
    pub max_depth: usize,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AppConfig {
    /// Load `incload.toml` (or `incload.json`) from `root`, falling back to
    /// defaults when neither exists. TOML wins when both are present.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let toml_path = root.join(TOML_CONFIG);
        let json_path = root.join(JSON_CONFIG);

        if toml_path.exists() {
            load_config_by_path(&toml_path)
        } else if json_path.exists() {
            load_config_by_path(&json_path)
        } else {
            Ok(AppConfig::default())
        }
    }

    /// Maximum include depth, `None` when unlimited.
    pub fn max_depth(&self) -> Option<usize> {
        match self.resolver.max_depth {
            0 => None,
            depth => Some(depth),
        }
    }

    /// Loader root made absolute against `base` when relative.
    pub fn loader_root(&self, base: impl AsRef<Path>) -> Option<PathBuf> {
        self.loader.root.as_ref().map(|root| base.as_ref().join(root))
    }

    pub fn archive_path(&self, base: impl AsRef<Path>) -> Option<PathBuf> {
        self.loader
            .archive
            .as_ref()
            .map(|archive| base.as_ref().join(archive))
    }
}

pub fn load_config_by_path(path: &Path) -> Result<AppConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&raw)
            .with_context(|| format!("invalid JSON config: {}", path.display())),
        _ => toml::from_str(&raw)
            .with_context(|| format!("invalid TOML config: {}", path.display())),
    }
}

#[cfg(test)]
#[path = "test_config.rs"]
mod tests;
