//! CLI command handlers, one per file.

mod completions;
mod info;
mod process;
mod resolve;
mod sources;

pub use completions::{run_completions, run_man};
pub use info::run_info;
pub use process::run_process;
pub use resolve::run_resolve;
pub use sources::run_sources;
