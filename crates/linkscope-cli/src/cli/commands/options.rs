//! Output settings shared by inspect, outline and watch.

use anyhow::Result;
use linkscope_core::config::LinkscopeConfig;
use linkscope_core::labels::Labels;
use linkscope_core::render::OutputFormat;
use linkscope_core::{Inspector, OutlineBuilder};

/// Config values with command-line overrides applied.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub builder: OutlineBuilder,
    pub labels: Labels,
}

impl OutputOptions {
    pub fn resolve(
        cfg: &LinkscopeConfig,
        format: Option<OutputFormat>,
        max_depth: Option<usize>,
    ) -> Result<Self> {
        let mut cfg = cfg.clone();
        if let Some(depth) = max_depth {
            cfg.max_depth = depth;
        }
        cfg.validate()?;
        Ok(Self {
            format: format.unwrap_or(cfg.format),
            builder: cfg.outline_builder(),
            labels: cfg.labels,
        })
    }

    pub fn inspector(&self) -> Inspector {
        Inspector::new(self.builder)
    }
}
