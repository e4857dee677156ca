//! Edit result types

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::PatchReport;

/// Result of an edit run
#[derive(Debug, Clone, Serialize)]
pub struct EditResult {
    pub project: PathBuf,
    /// Operation names in the order they ran
    pub operations: Vec<&'static str>,
    pub report: PatchReport,
    /// Backup sibling written before the commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    /// Whether the project file was rewritten
    pub written: bool,
    pub dry_run: bool,
    /// Unified diff of the pending change (dry runs only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl EditResult {
    pub fn new(project: PathBuf, dry_run: bool) -> Self {
        Self {
            project,
            operations: Vec::new(),
            report: PatchReport::new(),
            backup: None,
            written: false,
            dry_run,
            diff: None,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.report.has_changes()
    }

    /// No error-level diagnostics
    pub fn is_success(&self) -> bool {
        !self.report.has_errors()
    }
}
