//! Backup port - copies of the project document taken before a write

use std::path::{Path, PathBuf};

use crate::error::PbxResult;

/// Writes and finds backup siblings of a project document
pub trait BackupWriter {
    /// Save `content` next to `project`, returning the backup path
    fn write_backup(&self, project: &Path, content: &str) -> PbxResult<PathBuf>;

    /// Most recent backup of `project`, if any
    fn latest_backup(&self, project: &Path) -> PbxResult<Option<PathBuf>>;
}
