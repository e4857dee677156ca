//! Section locator
//!
//! Finds the line ranges of the four sections. Table sections are framed by
//! `/* Begin X section */` / `/* End X section */` markers; list sections are a
//! `key = (` ... `);` block inside a named object. The locator never guesses:
//! a missing marker or anchor is `SectionNotFound`, a list that will not close
//! is `CorruptionDetected`.

use std::ops::Range;

use crate::domain::entities::{EntryLine, ProjectDocument};
use crate::domain::value_objects::{BuildPhase, ObjectId, SectionKind};
use crate::error::{PbxError, PbxResult};

/// Which section to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTarget<'a> {
    BuildFiles,
    FileReferences,
    /// Group named by its inline comment or by its bare identifier
    Group(&'a str),
    /// First object of the phase's marker section
    Phase(BuildPhase),
}

impl SectionTarget<'_> {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionTarget::BuildFiles => SectionKind::BuildFiles,
            SectionTarget::FileReferences => SectionKind::FileReferences,
            SectionTarget::Group(_) => SectionKind::GroupMembership,
            SectionTarget::Phase(_) => SectionKind::PhaseMembership,
        }
    }
}

/// Line range of a section. `header` is the begin marker or the owning object
/// header, `footer` the end marker or the closing `);`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub kind: SectionKind,
    pub header: usize,
    pub body: Range<usize>,
    pub footer: usize,
}

/// A list section together with the object that owns it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSpan {
    pub owner: ObjectId,
    pub owner_name: Option<String>,
    /// The `key = (` line
    pub opener: usize,
    pub span: SectionSpan,
}

#[derive(Debug, Clone, Copy)]
pub struct SectionLocator {
    scan_limit: usize,
}

impl Default for SectionLocator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCAN_LIMIT)
    }
}

impl SectionLocator {
    /// Maximum lines scanned for the end of an object or list
    pub const DEFAULT_SCAN_LIMIT: usize = 500;

    pub fn new(scan_limit: usize) -> Self {
        Self {
            scan_limit: scan_limit.max(1),
        }
    }

    pub fn scan_limit(&self) -> usize {
        self.scan_limit
    }

    pub fn locate(&self, doc: &ProjectDocument, target: SectionTarget<'_>) -> PbxResult<SectionSpan> {
        match target {
            SectionTarget::BuildFiles => self.table(doc, "PBXBuildFile", SectionKind::BuildFiles),
            SectionTarget::FileReferences => {
                self.table(doc, "PBXFileReference", SectionKind::FileReferences)
            }
            SectionTarget::Group(_) | SectionTarget::Phase(_) => {
                self.locate_list(doc, target).map(|list| list.span)
            }
        }
    }

    /// Like `locate`, but a missing section is `Ok(None)` instead of an error
    pub fn locate_optional(
        &self,
        doc: &ProjectDocument,
        target: SectionTarget<'_>,
    ) -> PbxResult<Option<SectionSpan>> {
        match self.locate(doc, target) {
            Ok(span) => Ok(Some(span)),
            Err(PbxError::SectionNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Locate a group's `children` list or a phase's `files` list
    pub fn locate_list(&self, doc: &ProjectDocument, target: SectionTarget<'_>) -> PbxResult<ListSpan> {
        let kind = target.kind();
        let (isa, key, wanted) = match target {
            SectionTarget::Group(name) => ("PBXGroup", "children", Some(name)),
            SectionTarget::Phase(phase) => (phase.isa(), "files", None),
            _ => {
                return Err(PbxError::SectionNotFound {
                    section: kind,
                    detail: "not a list section".to_string(),
                })
            }
        };

        let (begin, end) = self
            .marker_section(doc, isa, kind)?
            .ok_or_else(|| PbxError::SectionNotFound {
                section: kind,
                detail: format!("missing `/* Begin {} section */` marker", isa),
            })?;

        for index in begin + 1..end {
            let Some(entry) = doc.line(index).and_then(EntryLine::parse) else {
                continue;
            };
            if !entry.is_object_header() {
                continue;
            }
            if let Some(name) = wanted {
                if entry.comment != Some(name) && entry.id.as_str() != name {
                    continue;
                }
            }
            return self
                .object_list(doc, kind, index, end, key)?
                .ok_or_else(|| PbxError::CorruptionDetected {
                    section: kind,
                    line: index + 1,
                    reason: format!("object {} has no `{} = (` list", entry.id, key),
                });
        }

        Err(PbxError::SectionNotFound {
            section: kind,
            detail: match wanted {
                Some(name) => format!("no group named '{}'", name),
                None => format!("no {} object", isa),
            },
        })
    }

    /// Every `children` list of the group section
    pub fn group_lists(&self, doc: &ProjectDocument) -> PbxResult<Vec<ListSpan>> {
        self.all_lists(doc, "PBXGroup", "children", SectionKind::GroupMembership)
    }

    /// Every `files` list of one phase kind (one per target)
    pub fn phase_lists(&self, doc: &ProjectDocument, phase: BuildPhase) -> PbxResult<Vec<ListSpan>> {
        self.all_lists(doc, phase.isa(), "files", SectionKind::PhaseMembership)
    }

    /// Begin/end marker lines of `/* Begin <isa> section */`
    pub fn marker_section(
        &self,
        doc: &ProjectDocument,
        isa: &str,
        kind: SectionKind,
    ) -> PbxResult<Option<(usize, usize)>> {
        let begin_marker = format!("/* Begin {} section */", isa);
        let end_marker = format!("/* End {} section */", isa);

        let Some(begin) = doc.lines().iter().position(|l| l.trim() == begin_marker) else {
            return Ok(None);
        };

        for (index, line) in doc.lines().iter().enumerate().skip(begin + 1) {
            let trimmed = line.trim();
            if trimmed == end_marker {
                return Ok(Some((begin, index)));
            }
            if trimmed.starts_with("/* Begin ") && trimmed.ends_with(" section */") {
                return Err(PbxError::CorruptionDetected {
                    section: kind,
                    line: index + 1,
                    reason: format!("`{}` reached before `{}`", trimmed, end_marker),
                });
            }
        }

        Err(PbxError::CorruptionDetected {
            section: kind,
            line: begin + 1,
            reason: format!("missing `{}`", end_marker),
        })
    }

    fn table(&self, doc: &ProjectDocument, isa: &str, kind: SectionKind) -> PbxResult<SectionSpan> {
        let (begin, end) = self
            .marker_section(doc, isa, kind)?
            .ok_or_else(|| PbxError::SectionNotFound {
                section: kind,
                detail: format!("missing `/* Begin {} section */` marker", isa),
            })?;
        Ok(SectionSpan {
            kind,
            header: begin,
            body: begin + 1..end,
            footer: end,
        })
    }

    fn all_lists(
        &self,
        doc: &ProjectDocument,
        isa: &str,
        key: &str,
        kind: SectionKind,
    ) -> PbxResult<Vec<ListSpan>> {
        let Some((begin, end)) = self.marker_section(doc, isa, kind)? else {
            return Ok(Vec::new());
        };

        let mut lists = Vec::new();
        for index in begin + 1..end {
            let Some(entry) = doc.line(index).and_then(EntryLine::parse) else {
                continue;
            };
            if !entry.is_object_header() {
                continue;
            }
            match self.object_list(doc, kind, index, end, key)? {
                Some(list) => lists.push(list),
                None => tracing::debug!(owner = %entry.id, isa, "object has no {} list", key),
            }
        }
        Ok(lists)
    }

    /// Find `key = (` ... `);` inside the object whose header is at `header`
    fn object_list(
        &self,
        doc: &ProjectDocument,
        kind: SectionKind,
        header: usize,
        section_end: usize,
        key: &str,
    ) -> PbxResult<Option<ListSpan>> {
        let Some(entry) = doc.line(header).and_then(EntryLine::parse) else {
            return Ok(None);
        };
        let open_line = format!("{} = (", key);

        let mut opener = None;
        for index in header + 1..section_end {
            if index - header > self.scan_limit {
                return Err(self.unclosed(kind, header, "object"));
            }
            let trimmed = doc.line(index).unwrap_or_default().trim();
            if trimmed == "};" {
                return Ok(None);
            }
            if trimmed == open_line {
                opener = Some(index);
                break;
            }
            if trimmed.starts_with(&open_line) {
                return Err(PbxError::CorruptionDetected {
                    section: kind,
                    line: index + 1,
                    reason: format!("single-line `{}` list is not supported", key),
                });
            }
        }
        let Some(opener) = opener else {
            return Err(self.unclosed(kind, header, "object"));
        };

        for index in opener + 1..section_end {
            if index - opener > self.scan_limit {
                return Err(self.unclosed(kind, opener, "list"));
            }
            let trimmed = doc.line(index).unwrap_or_default().trim();
            if trimmed == ");" {
                return Ok(Some(ListSpan {
                    owner: entry.id.clone(),
                    owner_name: entry.comment.map(str::to_string),
                    opener,
                    span: SectionSpan {
                        kind,
                        header,
                        body: opener + 1..index,
                        footer: index,
                    },
                }));
            }
            if trimmed.ends_with(");") {
                return Err(PbxError::DanglingSyntax {
                    section: kind,
                    line: index + 1,
                    text: trimmed.to_string(),
                });
            }
            if trimmed == "};" || trimmed.ends_with("= {") {
                return Err(PbxError::CorruptionDetected {
                    section: kind,
                    line: index + 1,
                    reason: format!(
                        "list opened at line {} runs into another object",
                        opener + 1
                    ),
                });
            }
        }

        Err(self.unclosed(kind, opener, "list"))
    }

    fn unclosed(&self, kind: SectionKind, start: usize, what: &str) -> PbxError {
        PbxError::CorruptionDetected {
            section: kind,
            line: start + 1,
            reason: format!(
                "{} opened at line {} is not closed within {} lines",
                what,
                start + 1,
                self.scan_limit
            ),
        }
    }
}
