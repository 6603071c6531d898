//! Tracing setup for linkscope.
//!
//! Events go to an append-only file in the XDG state dir. When that dir can't
//! be used, the CLI installs the stderr subscriber instead.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "info,linkscope=debug";

const LOG_DIR: &str = "linkscope";
const LOG_FILE: &str = "linkscope.log";

/// Where the log file lives under a given state home.
pub fn log_file_in(state_home: &Path) -> PathBuf {
    state_home.join(LOG_DIR).join(LOG_FILE)
}

/// Pick the directives to filter with: `raw` if it parses, otherwise the defaults.
fn directives_or_default(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() && EnvFilter::try_new(raw).is_ok() => raw,
        _ => DEFAULT_DIRECTIVES,
    }
}

fn env_filter() -> EnvFilter {
    let raw = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    EnvFilter::new(directives_or_default(raw.as_deref()))
}

/// Install the file subscriber and return the path it writes to.
pub fn init_logging() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix(LOG_DIR).context("resolve XDG dirs")?;
    let path = log_file_in(&dirs.get_state_home());
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging to file");
    Ok(path)
}

/// Stderr-only subscriber; a no-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
