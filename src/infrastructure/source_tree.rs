//! Source tree scan for `prune` and `add --source-root`

use std::collections::HashSet;
use std::path::Path;

use ignore::WalkBuilder;

use crate::error::{PbxError, PbxResult};

/// Build output and VCS directories never hold referenced sources
const SKIP_DIRS: &[&str] = &[".git", ".build", "build", "DerivedData"];

/// Names of every file and directory below `root`.
///
/// Ignore files are not honoured: a git-ignored file the project references
/// still exists. Directories count because bundles such as `Assets.xcassets`
/// are referenced as one file.
pub fn scan_file_names(root: &Path) -> PbxResult<HashSet<String>> {
    if !root.is_dir() {
        return Err(PbxError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("source root {} is not a directory", root.display()),
        )));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIP_DIRS.contains(&name))
        })
        .build();

    let mut names = HashSet::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            PbxError::Io(e.into_io_error().unwrap_or_else(|| {
                std::io::Error::other("source tree walk failed")
            }))
        })?;
        if entry.depth() == 0 {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.insert(name.to_string());
        }
    }
    tracing::debug!(root = %root.display(), count = names.len(), "scanned source tree");
    Ok(names)
}
