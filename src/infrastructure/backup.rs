//! Backup siblings of the project document
//!
//! `project.pbxproj` is copied to `project.pbxproj.backup_<label>` before any
//! write, where the label is the local time (`%Y%m%d-%H%M%S` by default). The
//! copy is read back and compared by SHA-256 before the edit may go ahead.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::domain::ports::{BackupWriter, FileSystem};
use crate::domain::value_objects::ContentHash;
use crate::error::{PbxError, PbxResult};

pub const DEFAULT_LABEL_FORMAT: &str = "%Y%m%d-%H%M%S";
const BACKUP_MARKER: &str = ".backup";

pub struct FsBackupWriter<FS: FileSystem> {
    fs: FS,
    label_format: String,
}

impl<FS: FileSystem> FsBackupWriter<FS> {
    pub fn new(fs: FS) -> Self {
        Self {
            fs,
            label_format: DEFAULT_LABEL_FORMAT.to_string(),
        }
    }

    /// Use a different `chrono` format string for the label
    pub fn with_label_format(mut self, format: impl Into<String>) -> Self {
        self.label_format = format.into();
        self
    }

    /// First free `<file>.backup_<label>[-N]` next to the project
    fn backup_path(&self, project: &Path) -> PathBuf {
        let label = Local::now().format(&self.label_format).to_string();
        let base = format!("{}{}_{}", file_name(project), BACKUP_MARKER, label);
        let mut candidate = project.with_file_name(&base);
        let mut n = 1;
        while self.fs.exists(&candidate) {
            candidate = project.with_file_name(format!("{}-{}", base, n));
            n += 1;
        }
        candidate
    }
}

impl<FS: FileSystem> BackupWriter for FsBackupWriter<FS> {
    fn write_backup(&self, project: &Path, content: &str) -> PbxResult<PathBuf> {
        let path = self.backup_path(project);
        let failure = |source: std::io::Error| PbxError::BackupWriteFailure {
            path: path.clone(),
            source,
        };

        self.fs
            .write_atomic(&path, content)
            .map_err(|e| failure(e.into_io()))?;

        let written = self.fs.read(&path).map_err(|e| failure(e.into_io()))?;
        if ContentHash::from_content(&written) != ContentHash::from_content(content) {
            return Err(failure(std::io::Error::other(
                "backup content does not match the project",
            )));
        }

        tracing::info!(backup = %path.display(), "backup written");
        Ok(path)
    }

    fn latest_backup(&self, project: &Path) -> PbxResult<Option<PathBuf>> {
        let Some(dir) = project.parent() else {
            return Ok(None);
        };
        let prefix = format!("{}{}", file_name(project), BACKUP_MARKER);
        let backups = self
            .fs
            .list_dir(dir)
            .map_err(|e| PbxError::Io(e.into_io()))?
            .into_iter()
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            });
        // timestamp labels sort chronologically by name
        Ok(backups.max())
    }
}

fn file_name(project: &Path) -> String {
    project
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project.pbxproj".to_string())
}
