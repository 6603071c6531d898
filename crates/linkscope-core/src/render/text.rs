//! Indented plain-text outline for terminals.

use crate::outline::{OutlineNode, ParameterEntry};

const INDENT: &str = "  ";

pub fn render_text(node: &OutlineNode) -> String {
    let mut out = String::new();
    push_node(&mut out, node, 0);
    out
}

fn push_node(out: &mut String, node: &OutlineNode, level: usize) {
    let pad = INDENT.repeat(level);
    if let (Some(host), Some(host_and_path)) = (&node.host, &node.host_and_path) {
        out.push_str(&format!("{pad}Host: {host}\n"));
        out.push_str(&format!("{pad}Host and path: {host_and_path}\n"));
    }
    if node.has_parameters() {
        out.push_str(&format!("{pad}Parameters:\n"));
        for entry in &node.parameters {
            push_entry(out, entry, level + 1);
        }
    }
}

fn push_entry(out: &mut String, entry: &ParameterEntry, level: usize) {
    let pad = INDENT.repeat(level);
    // Links are wrapped in angle brackets, autolink style.
    let value = if entry.is_url_value {
        format!("<{}>", entry.value)
    } else {
        entry.value.clone()
    };
    let marker = if entry.truncated { " (truncated)" } else { "" };
    out.push_str(&format!("{pad}{}: {value}{marker}\n", entry.name));
    if let Some(children) = &entry.children {
        push_node(out, children, level + 1);
    }
}
