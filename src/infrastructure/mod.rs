//! Infrastructure Layer
//!
//! Adapters for the domain ports: the local file system, backup siblings and
//! the source tree scan used by `prune`.

pub mod backup;
pub mod fs;
pub mod source_tree;

pub use backup::FsBackupWriter;
pub use fs::LocalFs;
pub use source_tree::scan_file_names;
