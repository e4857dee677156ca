//! Locating and loading the project document

use std::path::{Path, PathBuf};

use crate::domain::entities::ProjectDocument;
use crate::domain::ports::{FileSystem, FsError};
use crate::error::{PbxError, PbxResult};

pub const PROJECT_FILE: &str = "project.pbxproj";

/// Accept either the `.xcodeproj` bundle or the `project.pbxproj` inside it
pub fn resolve_project<FS: FileSystem>(fs: &FS, path: &Path) -> PbxResult<PathBuf> {
    let candidate = if fs.is_dir(path) {
        path.join(PROJECT_FILE)
    } else {
        path.to_path_buf()
    };
    if fs.exists(&candidate) && !fs.is_dir(&candidate) {
        Ok(candidate)
    } else {
        Err(PbxError::ProjectNotFound { path: candidate })
    }
}

/// Directory holding the `.xcodeproj` bundle, where `.pbxmend.toml` lives
pub fn project_root(pbxproj: &Path) -> Option<&Path> {
    let parent = pbxproj.parent()?;
    let is_bundle = parent
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xcodeproj"));
    if is_bundle {
        parent.parent()
    } else {
        Some(parent)
    }
}

/// Read the document, keeping the original text for the no-change check
pub fn load_document<FS: FileSystem>(
    fs: &FS,
    path: &Path,
) -> PbxResult<(String, ProjectDocument)> {
    let text = fs.read(path).map_err(|e| match e {
        FsError::NotFound(path) => PbxError::ProjectNotFound { path },
        other => PbxError::Io(other.into_io()),
    })?;
    let doc = ProjectDocument::parse(&text);
    tracing::debug!(project = %path.display(), lines = doc.len(), "loaded project");
    Ok((text, doc))
}
