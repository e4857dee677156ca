//! Application Layer
//!
//! Use cases that read a project, run domain services on it and commit the
//! result through the ports. No pbxproj rules live here.
//!
//! ## Use Cases
//!
//! - `EditUseCase` - add / remove / move / repair / prune with backup and atomic commit
//! - `CheckUseCase` - read-only consistency report
//! - `RestoreUseCase` - put the newest backup back

pub mod check;
pub mod edit;
pub mod project;
pub mod restore;

pub use check::{CheckResult, CheckUseCase};
pub use edit::{EditOptions, EditResult, EditUseCase, Operation};
pub use project::{project_root, resolve_project, PROJECT_FILE};
pub use restore::{RestoreResult, RestoreUseCase};
