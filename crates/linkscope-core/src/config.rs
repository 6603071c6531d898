use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::labels::Labels;
use crate::outline::{OutlineBuilder, DEFAULT_MAX_DEPTH};
use crate::render::OutputFormat;

/// Upper bound for `max_depth`; renderers recurse once per nesting level.
pub const MAX_DEPTH_LIMIT: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_depth must be at least 1")]
    ZeroMaxDepth,
    #[error("max_depth must be at most {limit} (got {got})")]
    MaxDepthTooLarge { got: usize, limit: usize },
}

/// Global configuration loaded from `~/.config/linkscope/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkscopeConfig {
    /// Nesting levels of URL-valued parameters expanded below the input URL.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Default outline format: "text" (default), "html" or "json".
    #[serde(default)]
    pub format: OutputFormat,
    /// User-facing strings; missing keys use built-in defaults.
    #[serde(default)]
    pub labels: Labels,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for LinkscopeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            format: OutputFormat::default(),
            labels: Labels::default(),
        }
    }
}

impl LinkscopeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroMaxDepth);
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::MaxDepthTooLarge {
                got: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        Ok(())
    }

    pub fn outline_builder(&self) -> OutlineBuilder {
        OutlineBuilder::new(self.max_depth)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkscope")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkscopeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkscopeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<LinkscopeConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: LinkscopeConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
