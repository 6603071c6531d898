//! `linkscope watch` – inspect each line from stdin as it arrives.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use super::inspect::format_inspection;
use super::OutputOptions;

pub fn run_watch(opts: &OutputOptions) -> Result<()> {
    let inspector = opts.inspector();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut first = true;

    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;
        let inspection = inspector.inspect(line.trim_end_matches('\r'));
        if !first {
            writeln!(stdout)?;
        }
        first = false;
        write!(stdout, "{}", format_inspection(&inspection, &opts.labels, opts.format)?)?;
        stdout.flush()?;
    }

    if first {
        // Nothing was piped in; mirror the host started without a link.
        writeln!(stdout, "{}", opts.labels.no_input)?;
    }
    Ok(())
}
