//! CLI command handlers, one per file.

mod completions;
mod fetch;
mod links;

pub use completions::run_completions;
pub use fetch::run_fetch;
pub use links::run_links;
