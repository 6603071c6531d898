//! Rendering of outlines for display.

mod html;
mod text;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::outline::OutlineNode;

pub use html::render_html;
pub use text::render_text;

/// Output representation for an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented plain text.
    #[default]
    Text,
    /// Nested `<ul>` markup with anchors for links.
    Html,
    Json,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output format {0:?} (expected text, html or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Pretty-printed JSON form of an outline.
pub fn render_json(node: &OutlineNode) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(node)
}

/// Renders `node` in the requested format.
pub fn render(node: &OutlineNode, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(node)),
        OutputFormat::Html => Ok(render_html(node)),
        OutputFormat::Json => render_json(node),
    }
}
