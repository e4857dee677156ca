//! Edit Use Case
//!
//! Orchestrates one read / patch / backup / commit cycle.

use std::path::Path;

use similar::TextDiff;

use crate::application::project::{load_document, resolve_project};
use crate::domain::entities::{PatchReport, ProjectDocument};
use crate::domain::ports::{BackupWriter, FileSystem};
use crate::domain::services::{
    build_generator, EditIds, IdGenerator, IntegrityPatcher, ProjectRepairer,
};
use crate::domain::value_objects::scan_ids;
use crate::error::{PbxError, PbxResult};

use super::options::{EditOptions, Operation};
use super::result::EditResult;

/// Edit use case - applies operations to a project document
pub struct EditUseCase<FS, B>
where
    FS: FileSystem,
    B: BackupWriter,
{
    fs: FS,
    backups: B,
}

impl<FS, B> EditUseCase<FS, B>
where
    FS: FileSystem,
    B: BackupWriter,
{
    pub fn new(fs: FS, backups: B) -> Self {
        Self { fs, backups }
    }

    /// Run the operations in order and commit once.
    ///
    /// Any structural error aborts before the backup is taken, so the project
    /// file is only touched when every operation succeeded.
    pub fn execute(
        &self,
        project: &Path,
        operations: &[Operation],
        options: &EditOptions,
    ) -> PbxResult<EditResult> {
        let path = resolve_project(&self.fs, project)?;
        let (original, mut doc) = load_document(&self.fs, &path)?;
        let mut result = EditResult::new(path.clone(), options.dry_run);

        let seed = doc.lines().iter().flat_map(|line| scan_ids(line));
        let mut ids = EditIds::new(build_generator(options.id_strategy, &options.scheme)?, seed);
        let explicit_repair = operations.iter().any(|op| matches!(op, Operation::Repair));
        if options.repair_first && !explicit_repair {
            result.operations.push(Operation::Repair.name());
            let report = ProjectRepairer::new(options.locator).repair(&mut doc, &mut ids)?;
            result.report.merge(report);
        }

        for operation in operations {
            tracing::debug!(operation = operation.name(), "applying");
            result.operations.push(operation.name());
            let report = apply(&mut doc, operation, options, &mut ids)?;
            result.report.merge(report);
        }

        let updated = doc.to_text();
        if updated == original {
            tracing::info!(project = %path.display(), "nothing to change");
            return Ok(result);
        }

        if options.dry_run {
            let old_name = path.display().to_string();
            let new_name = format!("{} (edited)", old_name);
            let diff = TextDiff::from_lines(original.as_str(), updated.as_str())
                .unified_diff()
                .context_radius(3)
                .header(&old_name, &new_name)
                .to_string();
            result.diff = Some(diff);
            return Ok(result);
        }

        let backup = if options.backup {
            Some(self.backups.write_backup(&path, &original)?)
        } else {
            tracing::debug!("backup disabled");
            None
        };

        self.fs
            .write_atomic(&path, &updated)
            .map_err(|e| match &backup {
                Some(backup) => PbxError::CommitFailed {
                    path: path.clone(),
                    backup: backup.clone(),
                    source: e.into_io(),
                },
                None => PbxError::Io(e.into_io()),
            })?;

        tracing::info!(
            project = %path.display(),
            changes = result.report.changes.len(),
            "project written"
        );
        result.backup = backup;
        result.written = true;
        Ok(result)
    }
}

fn apply(
    doc: &mut ProjectDocument,
    operation: &Operation,
    options: &EditOptions,
    ids: &mut dyn IdGenerator,
) -> PbxResult<PatchReport> {
    let patcher = IntegrityPatcher::new(options.locator, options.patch.clone());
    match operation {
        Operation::Add { files, placement } => patcher.add(doc, files, placement, ids),
        Operation::Remove { files } => patcher.remove(doc, files),
        Operation::Move { files, placement } => patcher.move_files(doc, files, placement),
        Operation::Repair => ProjectRepairer::new(options.locator).repair(doc, ids),
        Operation::Prune { present } => patcher.prune(doc, present),
    }
}
