//! Nested list markup.
//!
//! Links are emitted as `<a href="X">X</a>` with `X` embedded verbatim; values
//! are not escaped. Every list that is opened is closed.

use crate::outline::{OutlineNode, ParameterEntry};

pub fn render_html(node: &OutlineNode) -> String {
    let mut out = String::new();
    push_node(&mut out, node);
    out
}

fn push_node(out: &mut String, node: &OutlineNode) {
    out.push_str("<ul>");

    if let (Some(host), Some(host_and_path)) = (&node.host, &node.host_and_path) {
        out.push_str("<li><strong>Host:</strong> ");
        push_anchor(out, host);
        out.push_str("</li>");

        out.push_str("<li><strong>Host and path:</strong> ");
        push_anchor(out, host_and_path);
        out.push_str("</li>");
    }

    if node.has_parameters() {
        out.push_str("<li><strong>Parameters:</strong><ul>");
        for entry in &node.parameters {
            push_entry(out, entry);
        }
        out.push_str("</ul></li>");
    }

    out.push_str("</ul>");
}

fn push_entry(out: &mut String, entry: &ParameterEntry) {
    out.push_str("<li>");
    out.push_str(&entry.name);
    out.push_str(": ");
    if entry.is_url_value {
        push_anchor(out, &entry.value);
    } else {
        out.push_str(&entry.value);
    }
    if entry.truncated {
        out.push_str(" (truncated)");
    }
    if let Some(children) = &entry.children {
        push_node(out, children);
    }
    out.push_str("</li>");
}

fn push_anchor(out: &mut String, link: &str) {
    out.push_str("<a href=\"");
    out.push_str(link);
    out.push_str("\">");
    out.push_str(link);
    out.push_str("</a>");
}
