//! Patch report - what an operation changed and what it noticed

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{ObjectId, SectionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Category of a consistency finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Descriptor present in some sections but not all
    PartialMembership,
    /// Anchor missing, entry appended to the end of the list instead
    AnchorFallback,
    DuplicateIdentifier,
    DanglingSyntax,
    /// Build-file row pointing at a missing file reference
    DanglingReference,
    /// Same build file listed twice in phases
    DuplicateMembership,
    /// File reference listed in more than one group
    MultipleGroups,
    SectionNotFound,
    Corruption,
}

/// One finding, naming the file / section / identifier involved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 1-based line number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, kind, message)
    }

    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, kind, message)
    }

    fn new(severity: Severity, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind,
            file: None,
            section: None,
            id: None,
            line: None,
            message: message.into(),
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_section(mut self, section: SectionKind) -> Self {
        self.section = Some(section);
        self
    }

    pub fn with_id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}: ", file)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(section) = self.section {
            write!(f, " [{}", section)?;
            if let Some(line) = self.line {
                write!(f, ", line {}", line)?;
            }
            write!(f, "]")?;
        }
        if let Some(id) = &self.id {
            write!(f, " ({})", id)?;
        }
        Ok(())
    }
}

/// One effective change to the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "kebab-case")]
pub enum Change {
    Added {
        file: String,
        section: SectionKind,
        id: ObjectId,
    },
    Removed {
        file: String,
        section: SectionKind,
        id: ObjectId,
    },
    Moved {
        file: String,
        group: String,
    },
    Renumbered {
        file: String,
        section: SectionKind,
        old: ObjectId,
        new: ObjectId,
    },
    SyntaxFixed {
        line: usize,
    },
}

/// Outcome of one or more patch operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub changes: Vec<Change>,
    /// Files an operation left alone because they were already in the requested state
    pub unchanged: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, change: Change) {
        self.changes.push(change);
    }

    pub fn note_unchanged(&mut self, file: impl Into<String>) {
        self.unchanged.push(file.into());
    }

    pub fn diagnose(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(kind = ?diagnostic.kind, "{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub fn merge(&mut self, other: PatchReport) {
        self.changes.extend(other.changes);
        self.unchanged.extend(other.unchanged);
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}
