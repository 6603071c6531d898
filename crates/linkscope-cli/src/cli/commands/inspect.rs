//! `linkscope inspect <url>` – state, actions and outline for one URL.

use anyhow::Result;
use linkscope_core::labels::Labels;
use linkscope_core::render::{self, OutputFormat};
use linkscope_core::{Actions, Inspection};

use super::OutputOptions;

pub fn run_inspect(url: &str, opts: &OutputOptions) -> Result<()> {
    let inspection = opts.inspector().inspect(url);
    print!("{}", format_inspection(&inspection, &opts.labels, opts.format)?);
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

fn format_actions(actions: Actions) -> String {
    format!("Open: {}  Clear: {}", on_off(actions.open), on_off(actions.clear))
}

/// Report block for one inspection, newline-terminated.
pub(super) fn format_inspection(
    inspection: &Inspection,
    labels: &Labels,
    format: OutputFormat,
) -> Result<String> {
    let mut out = String::new();
    out.push_str(&labels.length_line(inspection.length));
    out.push('\n');
    out.push_str(&labels.state_line(inspection.state));
    out.push('\n');
    out.push_str(&format_actions(inspection.actions));
    out.push('\n');
    match &inspection.outline {
        Some(outline) => {
            let rendered = render::render(outline, format)?;
            out.push_str(&rendered);
            if !rendered.ends_with('\n') {
                out.push('\n');
            }
        }
        None => {
            out.push_str(&labels.no_parameters);
            out.push('\n');
        }
    }
    Ok(out)
}
