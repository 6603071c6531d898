//! Lenient URI splitting.
//!
//! [`ParsedUri`] is a read-only view over a string: scheme, host, path and
//! query parameters, without any normalization. Parsing never fails; input
//! that does not look like a URI at all simply ends up as a relative URI
//! whose path is the whole string.

mod decode;

use std::collections::HashSet;

pub(crate) use decode::percent_decode;

/// Read-only breakdown of a URI string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUri {
    scheme: Option<String>,
    host: Option<String>,
    path: String,
    hierarchical: bool,
    /// First value per name, in first-occurrence order.
    parameters: Vec<(String, String)>,
}

impl ParsedUri {
    pub fn parse(input: &str) -> Self {
        let (scheme, rest) = match split_scheme(input) {
            Some((scheme, rest)) => (Some(scheme.to_string()), rest),
            None => (None, input),
        };

        // Relative references are always hierarchical; absolute ones only
        // when the scheme-specific part starts with a slash.
        let hierarchical = scheme.is_none() || rest.starts_with('/');
        if !hierarchical {
            return Self {
                scheme,
                host: None,
                path: String::new(),
                hierarchical,
                parameters: Vec::new(),
            };
        }

        let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
        let (hier_part, query) = match rest.split_once('?') {
            Some((hier_part, query)) => (hier_part, Some(query)),
            None => (rest, None),
        };

        let (authority, path) = match hier_part.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, hier_part),
        };

        Self {
            scheme,
            host: authority.map(host_from_authority),
            path: percent_decode(path),
            hierarchical,
            parameters: query.map(parse_query).unwrap_or_default(),
        }
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Host component, or `None` when the URI has no authority.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_hierarchical(&self) -> bool {
        self.hierarchical
    }

    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    pub fn has_query_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Distinct parameter names in first-occurrence order.
    pub fn query_parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|(name, _)| name.as_str())
    }

    /// First value recorded for `name`; later repeats are ignored.
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Consumes the view, yielding `(name, first value)` pairs in order.
    pub fn into_query_parameters(self) -> Vec<(String, String)> {
        self.parameters
    }
}

/// Splits off a syntactically valid scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`).
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let colon = input.find([':', '/', '?', '#'])?;
    if !input[colon..].starts_with(':') {
        return None;
    }
    let scheme = &input[..colon];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic()
        || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }
    Some((scheme, &input[colon + 1..]))
}

/// Strips userinfo and port from an authority and decodes what is left.
fn host_from_authority(authority: &str) -> String {
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);
    let host = match host_port.rfind(':') {
        // A colon inside an IPv6 literal is not a port separator.
        Some(i) if !host_port[i..].contains(']') => &host_port[..i],
        _ => host_port,
    };
    percent_decode(host)
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut parameters: Vec<(String, String)> = Vec::new();
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if seen.contains(&*name) {
            continue;
        }
        let name = name.into_owned();
        seen.insert(name.clone());
        parameters.push((name, value.into_owned()));
    }
    parameters
}
