//! Error types for pbxmend
//!
//! Library code returns `PbxResult`; the binary wraps it in `anyhow` at the edge.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::{ObjectId, SectionKind};

/// Result type alias for pbxmend operations
pub type PbxResult<T> = Result<T, PbxError>;

/// Main error type for pbxmend operations
#[derive(Error, Debug)]
pub enum PbxError {
    /// A begin/end marker or anchor entry could not be located
    #[error("{section} not found: {detail}")]
    SectionNotFound { section: SectionKind, detail: String },

    /// The same identifier appears twice in a table that requires uniqueness
    #[error("duplicate identifier {id} in {section} (lines {first} and {second})")]
    DuplicateIdentifier {
        id: ObjectId,
        section: SectionKind,
        first: usize,
        second: usize,
    },

    /// A list entry is fused with the closing parenthesis (`X /* Y */,);`)
    #[error("dangling syntax in {section} at line {line}: `{text}`")]
    DanglingSyntax {
        section: SectionKind,
        line: usize,
        text: String,
    },

    /// A section's structure is broken in a way that cannot be edited safely
    #[error("corruption detected in {section} at line {line}: {reason}")]
    CorruptionDetected {
        section: SectionKind,
        line: usize,
        reason: String,
    },

    /// The pre-edit backup could not be written; nothing was mutated
    #[error("could not write backup {path}: {source}")]
    BackupWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Move was requested for a file without a file reference
    #[error("'{file}' is not a member of the project")]
    NotAMember { file: String },

    /// The sequential scheme has no counter values left
    #[error("identifier space exhausted for scheme {scheme}")]
    IdSpaceExhausted { scheme: String },

    /// A configured identifier scheme cannot produce 24-digit hex tokens
    #[error("invalid identifier scheme: {reason}")]
    InvalidIdScheme { reason: String },

    /// The project document does not exist
    #[error("project file not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// Restore was requested but no backup sibling exists
    #[error("no backup found for {path}")]
    NoBackup { path: PathBuf },

    /// The final write failed after the backup was taken
    #[error("failed to write {path} (backup kept at {backup}): {source}")]
    CommitFailed {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PbxError {
    /// Whether an explicit repair pass can resolve this error
    pub fn is_repairable(&self) -> bool {
        matches!(
            self,
            PbxError::DuplicateIdentifier {
                section: SectionKind::BuildFiles,
                ..
            } | PbxError::DanglingSyntax { .. }
        )
    }

    /// Backup path to mention when the failure happened after the backup
    pub fn backup_path(&self) -> Option<&PathBuf> {
        match self {
            PbxError::CommitFailed { backup, .. } => Some(backup),
            _ => None,
        }
    }
}
