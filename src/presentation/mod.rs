//! Presentation Layer
//!
//! - `factory` - use cases wired to the local file system
//! - `output` - text / JSON rendering of results
//! - `diff` - colored unified diff for dry runs

pub mod diff;
pub mod factory;
pub mod output;

pub use factory::{create_check_use_case, create_edit_use_case, create_restore_use_case};
pub use output::{create_renderer, JsonRenderer, OutputFormat, ResultRenderer, TextRenderer};
