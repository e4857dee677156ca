//! Project index
//!
//! Built once per operation: ordered rows of both tables, every group and
//! phase list with its members, and the set of identifiers already in use.
//! Operations plan their edits against this snapshot.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{split_phase_comment, EntryLine, ProjectDocument};
use crate::domain::value_objects::{scan_ids, BuildPhase, ObjectId, SectionKind};
use crate::error::{PbxError, PbxResult};

use super::locator::{ListSpan, SectionLocator, SectionSpan, SectionTarget};

/// A row of the build-file or file-reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub line: usize,
    pub id: ObjectId,
    pub comment: Option<String>,
    /// `fileRef` target (build-file rows)
    pub file_ref: Option<ObjectId>,
    /// `path` value (file-reference rows)
    pub path: Option<String>,
    pub source_tree: Option<String>,
    pub file_type: Option<String>,
}

impl TableRow {
    fn from_entry(line: usize, entry: &EntryLine<'_>) -> Self {
        Self {
            line,
            id: entry.id.clone(),
            comment: entry.comment.map(str::to_string),
            file_ref: entry.file_ref(),
            path: entry.field("path").map(str::to_string),
            source_tree: entry.field("sourceTree").map(str::to_string),
            file_type: entry
                .field("lastKnownFileType")
                .or_else(|| entry.field("explicitFileType"))
                .map(str::to_string),
        }
    }

    /// File name from the comment (phase suffix removed), else from `path`
    pub fn file_name(&self) -> Option<&str> {
        match &self.comment {
            Some(comment) => Some(split_phase_comment(comment).0),
            None => self.path.as_deref(),
        }
    }

    pub fn phase(&self) -> Option<BuildPhase> {
        self.comment
            .as_deref()
            .and_then(|c| split_phase_comment(c).1)
    }

    /// Last component of `path`, for references that live in the source tree
    /// (`<group>` or `SOURCE_ROOT`). Built products and SDK files give `None`.
    pub fn source_file_name(&self) -> Option<&str> {
        let tree = self.source_tree.as_deref()?.trim_matches('"');
        if tree != "<group>" && tree != "SOURCE_ROOT" {
            return None;
        }
        let path = self.path.as_deref()?.trim_matches('"');
        path.rsplit('/').next().filter(|name| !name.is_empty())
    }
}

/// A member line of a group or phase list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub line: usize,
    pub id: ObjectId,
    pub comment: Option<String>,
    pub trailing_comma: bool,
}

impl Member {
    pub fn file_name(&self) -> Option<&str> {
        self.comment.as_deref().map(|c| split_phase_comment(c).0)
    }
}

/// A list section with its parsed members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberList {
    pub list: ListSpan,
    pub members: Vec<Member>,
}

impl MemberList {
    fn read(doc: &ProjectDocument, list: ListSpan) -> Self {
        let members = list
            .span
            .body
            .clone()
            .filter_map(|line| {
                let entry = EntryLine::parse(doc.line(line)?)?;
                entry.is_member().then(|| Member {
                    line,
                    id: entry.id.clone(),
                    comment: entry.comment.map(str::to_string),
                    trailing_comma: entry.has_trailing_comma(),
                })
            })
            .collect();
        Self { list, members }
    }

    pub fn span(&self) -> &SectionSpan {
        &self.list.span
    }

    pub fn name(&self) -> String {
        self.list
            .owner_name
            .clone()
            .unwrap_or_else(|| self.list.owner.to_string())
    }

    pub fn find(&self, id: &ObjectId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub fn last(&self) -> Option<&Member> {
        self.members.last()
    }
}

/// A phase list tagged with its phase kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseList {
    pub phase: BuildPhase,
    pub members: MemberList,
}

#[derive(Debug, Clone)]
pub struct ProjectIndex {
    pub build_table: Option<SectionSpan>,
    pub build_files: Vec<TableRow>,
    pub ref_table: Option<SectionSpan>,
    pub file_refs: Vec<TableRow>,
    pub groups: Vec<MemberList>,
    pub phases: Vec<PhaseList>,
    /// Every identifier-shaped token anywhere in the document
    pub known_ids: HashSet<ObjectId>,
}

impl ProjectIndex {
    pub fn build(doc: &ProjectDocument, locator: &SectionLocator) -> PbxResult<Self> {
        let build_table = locator.locate_optional(doc, SectionTarget::BuildFiles)?;
        let ref_table = locator.locate_optional(doc, SectionTarget::FileReferences)?;

        let build_files = build_table
            .as_ref()
            .map(|span| read_rows(doc, span))
            .unwrap_or_default();
        let file_refs = ref_table
            .as_ref()
            .map(|span| read_rows(doc, span))
            .unwrap_or_default();

        let groups = locator
            .group_lists(doc)?
            .into_iter()
            .map(|list| MemberList::read(doc, list))
            .collect();

        let mut phases = Vec::new();
        for phase in BuildPhase::ALL {
            for list in locator.phase_lists(doc, phase)? {
                phases.push(PhaseList {
                    phase,
                    members: MemberList::read(doc, list),
                });
            }
        }

        let known_ids = doc.lines().iter().flat_map(|l| scan_ids(l)).collect();

        Ok(Self {
            build_table,
            build_files,
            ref_table,
            file_refs,
            groups,
            phases,
            known_ids,
        })
    }

    /// `(id, first line, second line)` for every repeated id in a table (1-based lines)
    pub fn duplicates(&self, kind: SectionKind) -> Vec<(ObjectId, usize, usize)> {
        let rows = match kind {
            SectionKind::BuildFiles => &self.build_files,
            SectionKind::FileReferences => &self.file_refs,
            _ => return Vec::new(),
        };
        let mut first_seen: HashMap<&ObjectId, usize> = HashMap::new();
        let mut dups = Vec::new();
        for row in rows {
            match first_seen.get(&row.id) {
                Some(first) => dups.push((row.id.clone(), first + 1, row.line + 1)),
                None => {
                    first_seen.insert(&row.id, row.line);
                }
            }
        }
        dups
    }

    /// Refuse to plan edits over tables with repeated identifiers
    pub fn ensure_unique(&self) -> PbxResult<()> {
        for kind in [SectionKind::BuildFiles, SectionKind::FileReferences] {
            if let Some((id, first, second)) = self.duplicates(kind).into_iter().next() {
                return Err(PbxError::DuplicateIdentifier {
                    id,
                    section: kind,
                    first,
                    second,
                });
            }
        }
        Ok(())
    }

    pub fn require_build_table(&self) -> PbxResult<&SectionSpan> {
        self.build_table.as_ref().ok_or_else(|| PbxError::SectionNotFound {
            section: SectionKind::BuildFiles,
            detail: "missing `/* Begin PBXBuildFile section */` marker".to_string(),
        })
    }

    pub fn require_ref_table(&self) -> PbxResult<&SectionSpan> {
        self.ref_table.as_ref().ok_or_else(|| PbxError::SectionNotFound {
            section: SectionKind::FileReferences,
            detail: "missing `/* Begin PBXFileReference section */` marker".to_string(),
        })
    }

    /// File-reference rows whose comment or path names `name`
    pub fn file_refs_named(&self, name: &str) -> Vec<&TableRow> {
        self.file_refs
            .iter()
            .filter(|row| row.file_name() == Some(name) || row.path.as_deref() == Some(name))
            .collect()
    }

    pub fn file_ref(&self, id: &ObjectId) -> Option<&TableRow> {
        self.file_refs.iter().find(|row| &row.id == id)
    }

    /// Build-file rows for a file: by `fileRef` target or by inline comment
    pub fn build_files_for(&self, name: &str, file_refs: &[ObjectId]) -> Vec<&TableRow> {
        self.build_files
            .iter()
            .filter(|row| {
                row.file_ref.as_ref().is_some_and(|r| file_refs.contains(r))
                    || row.file_name() == Some(name)
            })
            .collect()
    }

    pub fn group(&self, name: &str) -> Option<&MemberList> {
        self.groups.iter().find(|g| {
            g.list.owner_name.as_deref() == Some(name) || g.list.owner.as_str() == name
        })
    }

    /// Groups listing a member with this id
    pub fn groups_containing(&self, id: &ObjectId) -> Vec<&MemberList> {
        self.groups.iter().filter(|g| g.find(id).is_some()).collect()
    }

    /// First list of the phase kind; new members always go there
    pub fn phase(&self, phase: BuildPhase) -> Option<&MemberList> {
        self.phases
            .iter()
            .find(|p| p.phase == phase)
            .map(|p| &p.members)
    }

    /// Every phase member line for a build-file id
    pub fn phase_members(&self, id: &ObjectId) -> Vec<(&PhaseList, &Member)> {
        self.phases
            .iter()
            .flat_map(|p| p.members.members.iter().map(move |m| (p, m)))
            .filter(|(_, m)| &m.id == id)
            .collect()
    }
}

fn read_rows(doc: &ProjectDocument, span: &SectionSpan) -> Vec<TableRow> {
    span.body
        .clone()
        .filter_map(|line| {
            let entry = EntryLine::parse(doc.line(line)?)?;
            entry
                .is_table_row()
                .then(|| TableRow::from_entry(line, &entry))
        })
        .collect()
}
