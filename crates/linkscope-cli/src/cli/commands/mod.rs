//! CLI command handlers, one file per command.

mod classify;
mod completions;
mod inspect;
mod man;
mod options;
mod outline;
mod watch;

pub use classify::run_classify;
pub use completions::run_completions;
pub use inspect::run_inspect;
pub use man::run_man;
pub use options::OutputOptions;
pub use outline::run_outline;
pub use watch::run_watch;
