//! CLI command handlers. Each command is in its own file.

mod completions;
mod info;
mod resolve;
mod url;
mod validate;

pub use completions::run_completions;
pub use info::run_info;
pub use resolve::run_resolve;
pub use url::run_url;
pub use validate::run_validate;
