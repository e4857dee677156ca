//! Restore Use Case
//!
//! Puts the newest backup sibling back over the project file.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::project::{resolve_project, PROJECT_FILE};
use crate::domain::ports::{BackupWriter, FileSystem};
use crate::domain::value_objects::ContentHash;
use crate::error::{PbxError, PbxResult};

#[derive(Debug, Clone, Serialize)]
pub struct RestoreResult {
    pub project: PathBuf,
    pub backup: PathBuf,
    /// False when the project already matched the backup, or on a dry run
    pub written: bool,
    pub dry_run: bool,
}

pub struct RestoreUseCase<FS, B>
where
    FS: FileSystem,
    B: BackupWriter,
{
    fs: FS,
    backups: B,
}

impl<FS, B> RestoreUseCase<FS, B>
where
    FS: FileSystem,
    B: BackupWriter,
{
    pub fn new(fs: FS, backups: B) -> Self {
        Self { fs, backups }
    }

    pub fn execute(&self, project: &Path, dry_run: bool) -> PbxResult<RestoreResult> {
        // the project file itself may be the thing that went missing
        let path = match resolve_project(&self.fs, project) {
            Ok(path) => path,
            Err(_) if self.fs.is_dir(project) => project.join(PROJECT_FILE),
            Err(_) => project.to_path_buf(),
        };

        let backup = self
            .backups
            .latest_backup(&path)?
            .ok_or_else(|| PbxError::NoBackup { path: path.clone() })?;
        let content = self.fs.read(&backup).map_err(|e| PbxError::Io(e.into_io()))?;

        let mut result = RestoreResult {
            project: path.clone(),
            backup: backup.clone(),
            written: false,
            dry_run,
        };

        let current = self.fs.read(&path).ok().map(|c| ContentHash::from_content(&c));
        if current == Some(ContentHash::from_content(&content)) {
            tracing::info!(backup = %backup.display(), "project already matches the backup");
            return Ok(result);
        }
        if dry_run {
            return Ok(result);
        }

        self.fs
            .write_atomic(&path, &content)
            .map_err(|e| PbxError::CommitFailed {
                path: path.clone(),
                backup: backup.clone(),
                source: e.into_io(),
            })?;
        tracing::info!(backup = %backup.display(), project = %path.display(), "restored");
        result.written = true;
        Ok(result)
    }
}
