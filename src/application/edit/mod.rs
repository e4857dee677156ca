//! Edit Use Case
//!
//! Runs add / remove / move / repair / prune against one project document:
//! - Resolving and reading the project file
//! - Optionally repairing duplicates and dangling syntax first
//! - Applying every operation in memory
//! - Writing a backup sibling, then committing the new text atomically

mod options;
mod result;
mod use_case;

pub use options::{EditOptions, Operation};
pub use result::EditResult;
pub use use_case::EditUseCase;
