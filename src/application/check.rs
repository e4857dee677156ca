//! Check Use Case
//!
//! Read-only consistency report for one project document.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::project::{load_document, resolve_project};
use crate::domain::entities::Diagnostic;
use crate::domain::ports::FileSystem;
use crate::domain::services::{ConsistencyChecker, SectionLocator};
use crate::error::PbxResult;

/// Result of the check operation
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub project: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    pub errors: usize,
    pub warnings: usize,
}

impl CheckResult {
    fn new(project: PathBuf, diagnostics: Vec<Diagnostic>) -> Self {
        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        let warnings = diagnostics.len() - errors;
        Self {
            project,
            diagnostics,
            errors,
            warnings,
        }
    }

    /// No error-level findings
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// No findings at all
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub struct CheckUseCase<FS: FileSystem> {
    fs: FS,
    locator: SectionLocator,
}

impl<FS: FileSystem> CheckUseCase<FS> {
    pub fn new(fs: FS, locator: SectionLocator) -> Self {
        Self { fs, locator }
    }

    pub fn execute(&self, project: &Path) -> PbxResult<CheckResult> {
        let path = resolve_project(&self.fs, project)?;
        let (_, doc) = load_document(&self.fs, &path)?;
        let diagnostics = ConsistencyChecker::new(self.locator).check(&doc);
        tracing::debug!(findings = diagnostics.len(), "check finished");
        Ok(CheckResult::new(path, diagnostics))
    }
}
