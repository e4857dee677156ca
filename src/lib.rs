//! pbxmend - keeps Xcode project files consistent while editing them
//!
//! Adds, moves and removes file entries in a `project.pbxproj` across the
//! build-file table, the file-reference table, group children and build-phase
//! files, and repairs the duplicate identifiers and fused list closes that
//! hand edits leave behind.
//!
//! ## Layers
//!
//! - `domain` - document model and the patch / repair / check services
//! - `application` - use cases (read, patch, back up, commit)
//! - `infrastructure` - local file system, backups, source tree scan
//! - `presentation` - use case wiring and output rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use config::Config;
pub use domain::entities::{FileDescriptor, PatchReport, Placement, ProjectDocument};
pub use domain::services::{ConsistencyChecker, IntegrityPatcher, ProjectRepairer};
pub use domain::value_objects::{FileRole, ObjectId, SectionKind};
pub use error::{PbxError, PbxResult};
