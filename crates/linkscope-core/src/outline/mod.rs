//! Recursive outline of a URL's host and query parameters.
//!
//! Any parameter value that itself parses as a hierarchical URI with query
//! parameters is broken down the same way, producing a tree of
//! [`OutlineNode`]s and [`ParameterEntry`]s.

mod build;

use serde::Serialize;

use crate::uri::ParsedUri;

pub use build::{build_outline, OutlineBuilder, DEFAULT_MAX_DEPTH};

/// Breakdown of one URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    /// `scheme://host` (or just the host for relative references).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_and_path: Option<String>,
    /// Query parameters in first-occurrence order; empty when the URL has none.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterEntry>,
}

impl OutlineNode {
    /// Host lines for `uri`, without parameters.
    pub(crate) fn header(uri: &ParsedUri) -> Self {
        let host = uri.host().map(|host| match uri.scheme() {
            Some(scheme) => format!("{scheme}://{host}"),
            None => host.to_string(),
        });
        let host_and_path = host.as_ref().map(|host| format!("{host}{}", uri.path()));
        Self {
            host,
            host_and_path,
            parameters: Vec::new(),
        }
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Looks up a direct parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterEntry> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// One `name=value` pair of a query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterEntry {
    pub name: String,
    pub value: String,
    /// Value matches the web-URL pattern (scheme optional).
    pub is_url_value: bool,
    /// Outline of the value, present when it has query parameters of its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<OutlineNode>,
    /// Expansion was cut off by the depth limit or a repeated value on the path.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl ParameterEntry {
    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }
}

#[cfg(test)]
mod tests;
