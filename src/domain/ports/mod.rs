//! Domain Ports (Interfaces)
//!
//! Boundaries the application layer talks through; infrastructure implements them.

pub mod backup;
pub mod file_system;

pub use backup::BackupWriter;
pub use file_system::{FileSystem, FsError, FsResult};
