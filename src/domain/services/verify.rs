//! Consistency checks
//!
//! Read-only. Reports every broken cross-reference between the four sections
//! as a `Diagnostic` instead of stopping at the first problem.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{Diagnostic, DiagnosticKind, EntryLine, ProjectDocument};
use crate::domain::value_objects::{ObjectId, SectionKind};
use crate::error::PbxError;

use super::index::ProjectIndex;
use super::locator::SectionLocator;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyChecker {
    locator: SectionLocator,
}

impl ConsistencyChecker {
    pub fn new(locator: SectionLocator) -> Self {
        Self { locator }
    }

    pub fn check(&self, doc: &ProjectDocument) -> Vec<Diagnostic> {
        let mut found = dangling_closes(doc);

        let index = match ProjectIndex::build(doc, &self.locator) {
            Ok(index) => index,
            // already reported line by line
            Err(PbxError::DanglingSyntax { .. }) if !found.is_empty() => return found,
            Err(err) => {
                found.push(from_error(&err));
                return found;
            }
        };

        for kind in [SectionKind::BuildFiles, SectionKind::FileReferences] {
            for (id, first, second) in index.duplicates(kind) {
                found.push(
                    Diagnostic::error(
                        DiagnosticKind::DuplicateIdentifier,
                        format!("identifier also used at line {}", first),
                    )
                    .with_section(kind)
                    .with_id(id)
                    .with_line(second),
                );
            }
        }

        let ref_ids: HashSet<&ObjectId> = index.file_refs.iter().map(|r| &r.id).collect();
        let build_ids: HashSet<&ObjectId> = index.build_files.iter().map(|b| &b.id).collect();

        for row in &index.build_files {
            let name = row.file_name().unwrap_or_default();
            match &row.file_ref {
                Some(target) if !ref_ids.contains(target) => found.push(
                    Diagnostic::error(
                        DiagnosticKind::DanglingReference,
                        format!("fileRef {} has no file reference", target),
                    )
                    .with_file(name)
                    .with_section(SectionKind::BuildFiles)
                    .with_id(row.id.clone())
                    .with_line(row.line + 1),
                ),
                _ => {}
            }
            if index.phase_members(&row.id).is_empty() {
                found.push(
                    Diagnostic::warning(
                        DiagnosticKind::PartialMembership,
                        "build file is not listed in any build phase",
                    )
                    .with_file(name)
                    .with_section(SectionKind::PhaseMembership)
                    .with_id(row.id.clone())
                    .with_line(row.line + 1),
                );
            }
        }

        for phase in &index.phases {
            let mut counts: HashMap<&ObjectId, usize> = HashMap::new();
            for member in &phase.members.members {
                let name = member.file_name().unwrap_or_default();
                if !build_ids.contains(&member.id) {
                    found.push(
                        Diagnostic::error(
                            DiagnosticKind::DanglingReference,
                            format!("{} member has no build file", phase.phase.isa()),
                        )
                        .with_file(name)
                        .with_section(SectionKind::PhaseMembership)
                        .with_id(member.id.clone())
                        .with_line(member.line + 1),
                    );
                }
                let count = counts.entry(&member.id).or_insert(0);
                *count += 1;
                if *count == 2 {
                    found.push(
                        Diagnostic::warning(
                            DiagnosticKind::DuplicateMembership,
                            format!("listed twice in {}", phase.members.name()),
                        )
                        .with_file(name)
                        .with_section(SectionKind::PhaseMembership)
                        .with_id(member.id.clone())
                        .with_line(member.line + 1),
                    );
                }
            }
        }

        for row in &index.file_refs {
            let name = row.file_name().unwrap_or_default();
            let groups = index.groups_containing(&row.id);
            match groups.len() {
                0 => found.push(
                    Diagnostic::warning(
                        DiagnosticKind::PartialMembership,
                        "file reference is not listed in any group",
                    )
                    .with_file(name)
                    .with_section(SectionKind::GroupMembership)
                    .with_id(row.id.clone())
                    .with_line(row.line + 1),
                ),
                1 => {}
                _ => {
                    let names: Vec<String> = groups.iter().map(|g| g.name()).collect();
                    found.push(
                        Diagnostic::warning(
                            DiagnosticKind::MultipleGroups,
                            format!("listed in groups {}", names.join(", ")),
                        )
                        .with_file(name)
                        .with_section(SectionKind::GroupMembership)
                        .with_id(row.id.clone()),
                    );
                }
            }
        }

        found
    }
}

/// Every list member fused to its closing `);`
fn dangling_closes(doc: &ProjectDocument) -> Vec<Diagnostic> {
    doc.lines()
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let trimmed = text.trim();
            if trimmed == ");" || !trimmed.ends_with(");") {
                return None;
            }
            let member = trimmed.trim_end_matches(");").trim_end();
            let member = member.strip_suffix(',').unwrap_or(member);
            let entry = EntryLine::parse(member).filter(EntryLine::is_member);
            if member.trim().is_empty() || entry.is_some() {
                let mut diag = Diagnostic::error(
                    DiagnosticKind::DanglingSyntax,
                    format!("list close fused to an entry: `{}`", trimmed),
                )
                .with_line(index + 1);
                if let Some(entry) = entry {
                    if let Some(name) = entry.file_name() {
                        diag = diag.with_file(name);
                    }
                    diag = diag.with_id(entry.id);
                }
                Some(diag)
            } else {
                None
            }
        })
        .collect()
}

fn from_error(err: &PbxError) -> Diagnostic {
    let (kind, section, line) = match err {
        PbxError::SectionNotFound { section, .. } => {
            (DiagnosticKind::SectionNotFound, Some(*section), None)
        }
        PbxError::DanglingSyntax { section, line, .. } => {
            (DiagnosticKind::DanglingSyntax, Some(*section), Some(*line))
        }
        PbxError::DuplicateIdentifier { section, second, .. } => {
            (DiagnosticKind::DuplicateIdentifier, Some(*section), Some(*second))
        }
        PbxError::CorruptionDetected { section, line, .. } => {
            (DiagnosticKind::Corruption, Some(*section), Some(*line))
        }
        _ => (DiagnosticKind::Corruption, None, None),
    };
    let mut diag = Diagnostic::error(kind, err.to_string());
    if let Some(section) = section {
        diag = diag.with_section(section);
    }
    if let Some(line) = line {
        diag = diag.with_line(line);
    }
    diag
}
