//! Duplicate and corruption repair
//!
//! Two passes, both safe to run again on their own output:
//!
//! 1. Renumber: the first build-file row carrying an identifier keeps it;
//!    every later row with the same identifier gets a fresh one, and the
//!    matching build-phase members (same old id, same file name) follow
//!    occurrence by occurrence.
//! 2. Syntax: a list member fused to its close (`X /* Y */,);`) is split
//!    back into the member and a `);` line.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::domain::entities::{
    Change, Diagnostic, DiagnosticKind, EditPlan, EntryLine, PatchReport, ProjectDocument,
};
use crate::domain::value_objects::{scan_ids, ObjectId, SectionKind};
use crate::error::PbxResult;

use super::id_generator::IdGenerator;
use super::locator::SectionLocator;

const DEFAULT_CLOSE_INDENT: &str = "\t\t\t";

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectRepairer {
    locator: SectionLocator,
}

impl ProjectRepairer {
    pub fn new(locator: SectionLocator) -> Self {
        Self { locator }
    }

    /// Run both passes
    pub fn repair(
        &self,
        doc: &mut ProjectDocument,
        ids: &mut dyn IdGenerator,
    ) -> PbxResult<PatchReport> {
        let mut report = PatchReport::new();
        self.renumber_duplicates(doc, ids, &mut report)?;
        self.fix_dangling_closes(doc, &mut report);
        Ok(report)
    }

    pub fn renumber_duplicates(
        &self,
        doc: &mut ProjectDocument,
        ids: &mut dyn IdGenerator,
        report: &mut PatchReport,
    ) -> PbxResult<()> {
        let Some((begin, end)) =
            self.locator
                .marker_section(doc, "PBXBuildFile", SectionKind::BuildFiles)?
        else {
            tracing::debug!("no build-file table, nothing to renumber");
            return Ok(());
        };

        let mut existing: HashSet<ObjectId> =
            doc.lines().iter().flat_map(|l| scan_ids(l)).collect();
        let mut owner: HashMap<ObjectId, String> = HashMap::new();
        let mut fresh_ids: HashMap<(ObjectId, String), VecDeque<ObjectId>> = HashMap::new();
        let mut plan = EditPlan::new();

        for line in begin + 1..end {
            let Some(text) = doc.line(line) else {
                continue;
            };
            let Some(entry) = EntryLine::parse(text).filter(EntryLine::is_table_row) else {
                continue;
            };
            let name = entry.file_name().unwrap_or_default().to_string();
            if !owner.contains_key(&entry.id) {
                owner.insert(entry.id.clone(), name);
                continue;
            }

            let fresh = ids.next_id(&existing)?;
            existing.insert(fresh.clone());
            tracing::info!(old = %entry.id, new = %fresh, file = %name, "renumbering duplicate build file");

            plan.replace(line, renumber_row(text, &entry, &fresh));
            report.record(Change::Renumbered {
                file: name.clone(),
                section: SectionKind::BuildFiles,
                old: entry.id.clone(),
                new: fresh.clone(),
            });
            fresh_ids
                .entry((entry.id.clone(), name))
                .or_default()
                .push_back(fresh);
        }

        if !fresh_ids.is_empty() {
            let mut seen: HashMap<(ObjectId, String), usize> = HashMap::new();
            for (begin, end) in phase_sections(doc) {
                for line in begin + 1..end {
                    let Some(text) = doc.line(line) else {
                        continue;
                    };
                    let Some(entry) = EntryLine::parse(text).filter(EntryLine::is_member) else {
                        continue;
                    };
                    let name = entry.file_name().unwrap_or_default().to_string();
                    let key = (entry.id.clone(), name);
                    let Some(queue) = fresh_ids.get_mut(&key) else {
                        continue;
                    };

                    let occurrence = seen.entry(key.clone()).or_insert(0);
                    *occurrence += 1;
                    // The authoritative row keeps the first matching member
                    let kept = usize::from(owner.get(&key.0) == Some(&key.1));
                    if *occurrence <= kept {
                        continue;
                    }
                    let Some(fresh) = queue.pop_front() else {
                        continue;
                    };

                    plan.replace(line, renumber_row(text, &entry, &fresh));
                    report.record(Change::Renumbered {
                        file: key.1,
                        section: SectionKind::PhaseMembership,
                        old: key.0,
                        new: fresh,
                    });
                }
            }
            let mut orphans: Vec<_> = fresh_ids
                .iter()
                .flat_map(|((old, file), left)| left.iter().map(move |fresh| (old, file, fresh)))
                .collect();
            orphans.sort();
            for (old, file, fresh) in orphans {
                report.diagnose(
                    Diagnostic::warning(
                        DiagnosticKind::PartialMembership,
                        format!("renumbered build file {} (was {}) is in no build phase", fresh, old),
                    )
                    .with_file(file.clone())
                    .with_section(SectionKind::PhaseMembership)
                    .with_id(fresh.clone()),
                );
            }
        }

        doc.apply(plan);
        Ok(())
    }

    pub fn fix_dangling_closes(&self, doc: &mut ProjectDocument, report: &mut PatchReport) {
        let mut plan = EditPlan::new();

        for (index, text) in doc.lines().iter().enumerate() {
            let trimmed = text.trim();
            if trimmed == ");" || !trimmed.ends_with(");") {
                continue;
            }
            let member = trimmed.trim_end_matches(");").trim_end();
            let member = member.strip_suffix(',').unwrap_or(member).trim_end();
            let indent = &text[..text.len() - text.trim_start().len()];
            let close = format!("{});", self.close_indent(doc, index, indent));

            if member.is_empty() {
                plan.replace(index, close);
            } else if EntryLine::parse(member).is_some_and(|e| e.is_member()) {
                plan.replace(index, format!("{indent}{member}"));
                plan.insert_after(index, vec![close]);
            } else {
                continue;
            }

            tracing::info!(line = index + 1, "split dangling list close");
            report.record(Change::SyntaxFixed { line: index + 1 });
        }

        doc.apply(plan);
    }

    /// Indentation of the `key = (` opener above `line`
    fn close_indent(&self, doc: &ProjectDocument, line: usize, member_indent: &str) -> String {
        let floor = line.saturating_sub(self.locator.scan_limit());
        for index in (floor..line).rev() {
            let Some(text) = doc.line(index) else {
                continue;
            };
            let trimmed = text.trim_end();
            if trimmed.ends_with("= (") {
                return text[..text.len() - text.trim_start().len()].to_string();
            }
            if trimmed.trim() == ");" {
                break;
            }
        }
        match member_indent.strip_suffix('\t') {
            Some(shorter) => shorter.to_string(),
            None => DEFAULT_CLOSE_INDENT.to_string(),
        }
    }
}

/// Swap the leading identifier of an entry line, and its `fileRef` when it
/// pointed at the same token
fn renumber_row(text: &str, entry: &EntryLine<'_>, fresh: &ObjectId) -> String {
    let start = entry.indent.len();
    let tail = &text[start + ObjectId::WIDTH..];
    let tail = if entry.file_ref().as_ref() == Some(&entry.id) {
        tail.replacen(
            &format!("fileRef = {}", entry.id),
            &format!("fileRef = {}", fresh),
            1,
        )
    } else {
        tail.to_string()
    };
    format!("{}{}{}", entry.indent, fresh, tail)
}

/// Begin/end lines of every `PBX*BuildPhase` section
fn phase_sections(doc: &ProjectDocument) -> Vec<(usize, usize)> {
    let mut sections = Vec::new();
    let mut open = None;
    for (index, line) in doc.lines().iter().enumerate() {
        let trimmed = line.trim();
        if !trimmed.ends_with("BuildPhase section */") {
            continue;
        }
        if trimmed.starts_with("/* Begin PBX") {
            open = Some(index);
        } else if trimmed.starts_with("/* End PBX") {
            if let Some(begin) = open.take() {
                sections.push((begin, index));
            }
        }
    }
    sections
}
