//! `linkscope outline <url>` – outline any URI, skipping validation.

use anyhow::Result;
use linkscope_core::render;

use super::OutputOptions;

pub fn run_outline(url: &str, opts: &OutputOptions) -> Result<()> {
    match opts.builder.build(url) {
        Some(outline) => {
            let rendered = render::render(&outline, opts.format)?;
            if rendered.ends_with('\n') {
                print!("{rendered}");
            } else {
                println!("{rendered}");
            }
        }
        None => println!("{}", opts.labels.no_parameters),
    }
    Ok(())
}
