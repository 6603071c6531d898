//! CLI for linkscope.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use linkscope_core::config::{self, LinkscopeConfig};
use linkscope_core::render::OutputFormat;

use commands::{
    run_classify, run_completions, run_inspect, run_man, run_outline, run_watch, OutputOptions,
};

/// Top-level CLI for linkscope.
#[derive(Debug, Parser)]
#[command(name = "linkscope")]
#[command(about = "linkscope: check a URL and outline its (nested) query parameters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a URL and, when valid, outline its host and parameters.
    Inspect {
        /// URL to inspect (may be empty).
        url: String,
        /// Outline format: text, html or json (default from config).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
        /// Maximum nesting depth for URL-valued parameters (default from config).
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// Print only the validation state of a URL.
    Classify {
        /// URL to classify.
        url: String,
    },

    /// Outline a URL without validating it first.
    Outline {
        /// URL (or any URI) to outline.
        url: String,
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// Inspect every line read from stdin, as the input changes.
    Watch {
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Inspect {
                url,
                format,
                max_depth,
            } => {
                let cfg = load_config()?;
                run_inspect(&url, &OutputOptions::resolve(&cfg, format, max_depth)?)?;
            }
            CliCommand::Classify { url } => {
                let cfg = load_config()?;
                run_classify(&url, &cfg.labels);
            }
            CliCommand::Outline {
                url,
                format,
                max_depth,
            } => {
                let cfg = load_config()?;
                run_outline(&url, &OutputOptions::resolve(&cfg, format, max_depth)?)?;
            }
            CliCommand::Watch { format, max_depth } => {
                let cfg = load_config()?;
                run_watch(&OutputOptions::resolve(&cfg, format, max_depth)?)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

fn load_config() -> Result<LinkscopeConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
