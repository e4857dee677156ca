//! Integrity patcher
//!
//! Adds, removes and moves files across the four sections so that every
//! build file keeps pointing at one file reference and every file reference
//! stays listed in a group. Each operation indexes the document, plans all of
//! its edits against that snapshot and applies the plan once.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{
    Change, DescriptorIds, Diagnostic, DiagnosticKind, EditPlan, FileDescriptor, PatchReport,
    Placement, ProjectDocument,
};
use crate::domain::value_objects::{BuildPhase, ObjectId, SectionKind};
use crate::error::{PbxError, PbxResult};

use super::id_generator::IdGenerator;
use super::index::{Member, MemberList, ProjectIndex};
use super::locator::SectionLocator;
use super::synthesizer::{phase_comment, EntryStyle, EntrySynthesizer};

/// Behaviour switches for the patch operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOptions {
    /// Append to the end of the group when the anchor is not listed in it
    pub tail_fallback: bool,
    /// Separator for the first member of an empty list
    pub trailing_comma: bool,
    /// Group used when neither a group nor an anchor is given
    pub default_group: Option<String>,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            tail_fallback: false,
            trailing_comma: true,
            default_group: None,
        }
    }
}

/// Add / remove / move over all four sections
#[derive(Debug, Clone, Default)]
pub struct IntegrityPatcher {
    locator: SectionLocator,
    options: PatchOptions,
}

impl IntegrityPatcher {
    pub fn new(locator: SectionLocator, options: PatchOptions) -> Self {
        Self { locator, options }
    }

    pub fn options(&self) -> &PatchOptions {
        &self.options
    }

    /// Register files. Fully present files are left alone; partially present
    /// ones keep their identifiers and only get the missing entries.
    pub fn add(
        &self,
        doc: &mut ProjectDocument,
        descriptors: &[FileDescriptor],
        placement: &Placement,
        ids: &mut dyn IdGenerator,
    ) -> PbxResult<PatchReport> {
        let index = ProjectIndex::build(doc, &self.locator)?;
        index.ensure_unique()?;

        let mut report = PatchReport::new();
        let mut existing = index.known_ids.clone();
        let mut seen = HashSet::new();
        let mut pending = Vec::new();

        for descriptor in descriptors {
            let name = descriptor.name();
            if !seen.insert(name) {
                tracing::debug!(file = name, "listed twice, keeping the first");
                continue;
            }

            let presence = Presence::of(&index, descriptor);
            let missing = presence.missing(descriptor);
            if missing.is_empty() {
                tracing::debug!(file = name, "already registered in every section");
                report.note_unchanged(name);
                continue;
            }
            if presence.any() {
                let labels: Vec<&str> = missing.iter().map(SectionKind::label).collect();
                report.diagnose(
                    Diagnostic::warning(
                        DiagnosticKind::PartialMembership,
                        format!("partially registered, adding {}", labels.join(", ")),
                    )
                    .with_file(name),
                );
            }

            let file_ref = match presence.file_ref {
                Some(id) => id,
                None => allocate(ids, &mut existing)?,
            };
            let build_file = match (descriptor.is_built(), presence.build_file) {
                (false, _) => None,
                (true, Some(id)) => Some(id),
                (true, None) => Some(allocate(ids, &mut existing)?),
            };
            pending.push(PendingAdd {
                descriptor: descriptor.clone(),
                ids: DescriptorIds {
                    file_ref,
                    build_file,
                },
                missing,
            });
        }

        if pending.is_empty() {
            return Ok(report);
        }

        let anchor = placement.after.as_deref();
        let mut plan = EditPlan::new();
        self.plan_rows(doc, &index, SectionKind::FileReferences, &pending, anchor, &mut plan, &mut report)?;
        self.plan_rows(doc, &index, SectionKind::BuildFiles, &pending, anchor, &mut plan, &mut report)?;

        let for_group: Vec<&PendingAdd> = pending
            .iter()
            .filter(|p| p.missing.contains(&SectionKind::GroupMembership))
            .collect();
        if !for_group.is_empty() {
            let group = self.target_group(&index, placement)?;
            let mut edit = ListEdit::new(
                group,
                EntryStyle::discover(doc, group.span(), self.options.trailing_comma),
            );
            let anchor_ids = anchor.map(|a| ref_ids(&index, a)).unwrap_or_default();
            let slot = self.group_slot(&edit, anchor, &anchor_ids, &mut report)?;
            for p in for_group {
                let name = p.descriptor.name();
                edit.insert(slot, p.ids.file_ref.clone(), name.to_string());
                report.record(Change::Added {
                    file: name.to_string(),
                    section: SectionKind::GroupMembership,
                    id: p.ids.file_ref.clone(),
                });
            }
            edit.flush(doc, &mut plan);
        }

        for phase in BuildPhase::ALL {
            let for_phase: Vec<&PendingAdd> = pending
                .iter()
                .filter(|p| p.descriptor.role().phase() == Some(phase))
                .filter(|p| p.missing.contains(&SectionKind::PhaseMembership))
                .collect();
            if for_phase.is_empty() {
                continue;
            }

            let list = index.phase(phase).ok_or_else(|| PbxError::SectionNotFound {
                section: SectionKind::PhaseMembership,
                detail: format!("no {} with a files list", phase.isa()),
            })?;
            let style = EntryStyle::discover(doc, list.span(), self.options.trailing_comma);
            let mut edit = ListEdit::new(list, style);

            let anchor_builds = anchor.map(|a| build_ids(&index, a)).unwrap_or_default();
            let slot = match anchor.and_then(|a| edit.find(a, &anchor_builds)) {
                Some(member) => Slot::After(member.line),
                None => {
                    if let Some(anchor) = anchor {
                        tracing::info!(anchor, phase = ?phase, "anchor not in build phase, appending");
                        report.diagnose(
                            Diagnostic::warning(
                                DiagnosticKind::AnchorFallback,
                                format!("anchor not in {}, appended to the end", phase.isa()),
                            )
                            .with_file(anchor)
                            .with_section(SectionKind::PhaseMembership),
                        );
                    }
                    Slot::Tail
                }
            };

            for p in for_phase {
                let Some(build) = p.ids.build_file.clone() else {
                    continue;
                };
                let name = p.descriptor.name();
                edit.insert(slot, build.clone(), phase_comment(name, phase));
                report.record(Change::Added {
                    file: name.to_string(),
                    section: SectionKind::PhaseMembership,
                    id: build,
                });
            }
            edit.flush(doc, &mut plan);
        }

        doc.apply(plan);
        Ok(report)
    }

    /// Delete every entry naming the files, in all four sections
    pub fn remove<S: AsRef<str>>(
        &self,
        doc: &mut ProjectDocument,
        names: &[S],
    ) -> PbxResult<PatchReport> {
        let index = ProjectIndex::build(doc, &self.locator)?;
        index.ensure_unique()?;

        let owners: HashSet<&ObjectId> = index.groups.iter().map(|g| &g.list.owner).collect();
        let mut groups: Vec<ListEdit<'_>> = index
            .groups
            .iter()
            .map(|g| ListEdit::new(g, EntryStyle::default_for(SectionKind::GroupMembership, true)))
            .collect();
        let mut phases: Vec<ListEdit<'_>> = index
            .phases
            .iter()
            .map(|p| {
                ListEdit::new(
                    &p.members,
                    EntryStyle::default_for(SectionKind::PhaseMembership, true),
                )
            })
            .collect();

        let mut report = PatchReport::new();
        let mut plan = EditPlan::new();
        let mut seen = HashSet::new();

        for name in names {
            let name = name.as_ref();
            if !seen.insert(name) {
                continue;
            }

            let refs = index.file_refs_named(name);
            let ref_ids: Vec<ObjectId> = refs.iter().map(|r| r.id.clone()).collect();
            let builds = index.build_files_for(name, &ref_ids);
            let build_ids: Vec<ObjectId> = builds.iter().map(|b| b.id.clone()).collect();

            let mut group_hits = 0;
            for edit in &mut groups {
                let hits: Vec<Member> = edit
                    .survivors()
                    .filter(|m| {
                        ref_ids.contains(&m.id)
                            || (m.comment.as_deref() == Some(name) && !owners.contains(&m.id))
                    })
                    .cloned()
                    .collect();
                for member in hits {
                    edit.delete(&member);
                    report.record(Change::Removed {
                        file: name.to_string(),
                        section: SectionKind::GroupMembership,
                        id: member.id,
                    });
                    group_hits += 1;
                }
            }

            let mut phase_hits = 0;
            for edit in &mut phases {
                let hits: Vec<Member> = edit
                    .survivors()
                    .filter(|m| build_ids.contains(&m.id) || m.file_name() == Some(name))
                    .cloned()
                    .collect();
                for member in hits {
                    edit.delete(&member);
                    report.record(Change::Removed {
                        file: name.to_string(),
                        section: SectionKind::PhaseMembership,
                        id: member.id,
                    });
                    phase_hits += 1;
                }
            }

            for (kind, rows) in [
                (SectionKind::FileReferences, &refs),
                (SectionKind::BuildFiles, &builds),
            ] {
                for row in rows.iter() {
                    plan.delete(row.line);
                    report.record(Change::Removed {
                        file: name.to_string(),
                        section: kind,
                        id: row.id.clone(),
                    });
                }
            }

            if refs.is_empty() && builds.is_empty() && group_hits == 0 && phase_hits == 0 {
                tracing::debug!(file = name, "not registered, nothing to remove");
                report.note_unchanged(name);
                continue;
            }

            let built = !builds.is_empty() || phase_hits > 0;
            let mut absent = Vec::new();
            if refs.is_empty() {
                absent.push(SectionKind::FileReferences);
            }
            if group_hits == 0 {
                absent.push(SectionKind::GroupMembership);
            }
            if built && builds.is_empty() {
                absent.push(SectionKind::BuildFiles);
            }
            if built && phase_hits == 0 {
                absent.push(SectionKind::PhaseMembership);
            }
            for section in absent {
                report.diagnose(
                    Diagnostic::warning(
                        DiagnosticKind::PartialMembership,
                        format!("no entry in the {} to remove", section.label()),
                    )
                    .with_file(name)
                    .with_section(section),
                );
            }
        }

        for edit in groups.into_iter().chain(phases) {
            edit.flush(doc, &mut plan);
        }
        doc.apply(plan);
        Ok(report)
    }

    /// Remove every source-tree file whose name is not in `present`
    pub fn prune(
        &self,
        doc: &mut ProjectDocument,
        present: &HashSet<String>,
    ) -> PbxResult<PatchReport> {
        let index = ProjectIndex::build(doc, &self.locator)?;
        let mut missing: Vec<String> = Vec::new();
        for name in index.file_refs.iter().filter_map(|r| r.source_file_name()) {
            if !present.contains(name) && !missing.iter().any(|m| m == name) {
                missing.push(name.to_string());
            }
        }
        if missing.is_empty() {
            tracing::debug!("every referenced file is on disk");
            return Ok(PatchReport::new());
        }
        tracing::info!(files = ?missing, "pruning files missing from the source tree");
        self.remove(doc, &missing)
    }

    /// Move group memberships of the files into one group. Files land in
    /// caller order, each after the previous one.
    pub fn move_files<S: AsRef<str>>(
        &self,
        doc: &mut ProjectDocument,
        names: &[S],
        placement: &Placement,
    ) -> PbxResult<PatchReport> {
        let group = placement
            .group
            .as_deref()
            .or(self.options.default_group.as_deref())
            .ok_or_else(|| PbxError::SectionNotFound {
                section: SectionKind::GroupMembership,
                detail: "no target group given".to_string(),
            })?;

        let mut report = PatchReport::new();
        let mut anchor = placement.after.clone();
        let mut seen = HashSet::new();

        for name in names {
            let name = name.as_ref();
            if !seen.insert(name) {
                continue;
            }
            self.move_one(doc, name, group, anchor.as_deref(), &mut report)?;
            anchor = Some(name.to_string());
        }
        Ok(report)
    }

    fn move_one(
        &self,
        doc: &mut ProjectDocument,
        name: &str,
        group: &str,
        anchor: Option<&str>,
        report: &mut PatchReport,
    ) -> PbxResult<()> {
        let index = ProjectIndex::build(doc, &self.locator)?;
        index.ensure_unique()?;

        let file_ref = index
            .file_refs_named(name)
            .first()
            .map(|row| row.id.clone())
            .ok_or_else(|| PbxError::NotAMember {
                file: name.to_string(),
            })?;
        let target = index.group(group).ok_or_else(|| group_not_found(group))?;
        let anchor = anchor.filter(|a| *a != name);
        let anchor_ids = anchor.map(|a| ref_ids(&index, a)).unwrap_or_default();

        let current = index.groups_containing(&file_ref);
        let settled = match current.as_slice() {
            [only] if only.list.owner == target.list.owner => match anchor {
                None => true,
                Some(anchor) => {
                    let members = &target.members;
                    members
                        .iter()
                        .position(|m| m.id == file_ref)
                        .filter(|&i| i > 0)
                        .is_some_and(|i| {
                            let before = &members[i - 1];
                            anchor_ids.contains(&before.id)
                                || before.file_name() == Some(anchor)
                        })
                }
            },
            _ => false,
        };
        if settled {
            tracing::debug!(file = name, group, "already in place");
            report.note_unchanged(name);
            return Ok(());
        }

        let mut edits: Vec<ListEdit<'_>> = Vec::new();
        let mut target_at = None;
        for list in current.iter().copied().chain(std::iter::once(target)) {
            if edits.iter().any(|e| e.list.list.owner == list.list.owner) {
                continue;
            }
            if list.list.owner == target.list.owner {
                target_at = Some(edits.len());
            }
            let style = EntryStyle::discover(doc, list.span(), self.options.trailing_comma);
            let mut edit = ListEdit::new(list, style);
            let hits: Vec<Member> = list
                .members
                .iter()
                .filter(|m| m.id == file_ref)
                .cloned()
                .collect();
            for member in &hits {
                edit.delete(member);
            }
            edits.push(edit);
        }

        let Some(target_at) = target_at else {
            return Err(group_not_found(group));
        };
        let edit = &mut edits[target_at];
        let slot = self.group_slot(edit, anchor, &anchor_ids, report)?;
        edit.insert(slot, file_ref, name.to_string());

        let mut plan = EditPlan::new();
        for edit in edits {
            edit.flush(doc, &mut plan);
        }
        doc.apply(plan);

        report.record(Change::Moved {
            file: name.to_string(),
            group: target.name(),
        });
        Ok(())
    }

    /// Rows for one table, inserted after the anchor's row or before the end marker
    #[allow(clippy::too_many_arguments)]
    fn plan_rows(
        &self,
        doc: &ProjectDocument,
        index: &ProjectIndex,
        kind: SectionKind,
        pending: &[PendingAdd],
        anchor: Option<&str>,
        plan: &mut EditPlan,
        report: &mut PatchReport,
    ) -> PbxResult<()> {
        let wanted: Vec<&PendingAdd> = pending.iter().filter(|p| p.missing.contains(&kind)).collect();
        if wanted.is_empty() {
            return Ok(());
        }

        let span = match kind {
            SectionKind::BuildFiles => index.require_build_table()?,
            _ => index.require_ref_table()?,
        };
        let style = EntryStyle::discover(doc, span, self.options.trailing_comma);

        let anchor_row = anchor.and_then(|a| match kind {
            SectionKind::BuildFiles => index
                .build_files_for(a, &ref_ids(index, a))
                .last()
                .map(|row| row.line),
            _ => index.file_refs_named(a).last().map(|row| row.line),
        });
        if let (Some(anchor), None) = (anchor, anchor_row) {
            tracing::info!(anchor, section = %kind, "anchor has no row, appending to the table");
            report.diagnose(
                Diagnostic::warning(
                    DiagnosticKind::AnchorFallback,
                    format!("anchor has no {} row, appended to the end", kind.label()),
                )
                .with_file(anchor)
                .with_section(kind),
            );
        }

        let mut lines = Vec::new();
        for p in wanted {
            let Some(line) = EntrySynthesizer::render(kind, &p.descriptor, &p.ids, &style) else {
                continue;
            };
            let id = match kind {
                SectionKind::BuildFiles => p.ids.build_file.clone(),
                _ => Some(p.ids.file_ref.clone()),
            };
            if let Some(id) = id {
                report.record(Change::Added {
                    file: p.descriptor.name().to_string(),
                    section: kind,
                    id,
                });
            }
            lines.push(line);
        }

        match anchor_row {
            Some(line) => plan.insert_after(line, lines),
            None => plan.insert_before(span.footer, lines),
        }
        Ok(())
    }

    /// Group for new members: explicit, else the anchor's group, else the default
    fn target_group<'i>(
        &self,
        index: &'i ProjectIndex,
        placement: &Placement,
    ) -> PbxResult<&'i MemberList> {
        if let Some(name) = &placement.group {
            return index.group(name).ok_or_else(|| group_not_found(name));
        }
        if let Some(anchor) = &placement.after {
            let ids = ref_ids(index, anchor);
            let holder = index.groups.iter().find(|g| {
                g.members
                    .iter()
                    .any(|m| ids.contains(&m.id) || m.comment.as_deref() == Some(anchor.as_str()))
            });
            if let Some(group) = holder {
                return Ok(group);
            }
        }
        if let Some(name) = &self.options.default_group {
            return index.group(name).ok_or_else(|| group_not_found(name));
        }
        Err(PbxError::SectionNotFound {
            section: SectionKind::GroupMembership,
            detail: "no target group given".to_string(),
        })
    }

    /// Where a group member goes; a missing anchor is fatal unless tail fallback is on
    fn group_slot(
        &self,
        edit: &ListEdit<'_>,
        anchor: Option<&str>,
        anchor_ids: &[ObjectId],
        report: &mut PatchReport,
    ) -> PbxResult<Slot> {
        let Some(anchor) = anchor else {
            return Ok(Slot::Tail);
        };
        if let Some(member) = edit.find(anchor, anchor_ids) {
            return Ok(Slot::After(member.line));
        }
        if !self.options.tail_fallback {
            return Err(PbxError::SectionNotFound {
                section: SectionKind::GroupMembership,
                detail: format!("anchor '{}' is not in group '{}'", anchor, edit.list.name()),
            });
        }
        report.diagnose(
            Diagnostic::warning(
                DiagnosticKind::AnchorFallback,
                format!(
                    "anchor not in group '{}', appended to the end",
                    edit.list.name()
                ),
            )
            .with_file(anchor)
            .with_section(SectionKind::GroupMembership),
        );
        Ok(Slot::Tail)
    }
}

/// One descriptor queued by `add`
struct PendingAdd {
    descriptor: FileDescriptor,
    ids: DescriptorIds,
    missing: Vec<SectionKind>,
}

/// Which of a descriptor's entries already exist
struct Presence {
    file_ref: Option<ObjectId>,
    build_file: Option<ObjectId>,
    has_ref_row: bool,
    has_build_row: bool,
    in_group: bool,
    in_phase: bool,
}

impl Presence {
    fn of(index: &ProjectIndex, descriptor: &FileDescriptor) -> Self {
        let name = descriptor.name();
        let ref_rows = index.file_refs_named(name);
        let ref_ids: Vec<ObjectId> = ref_rows.iter().map(|r| r.id.clone()).collect();

        let group_member = index.groups.iter().flat_map(|g| &g.members).find(|m| {
            ref_ids.contains(&m.id) || (ref_ids.is_empty() && m.comment.as_deref() == Some(name))
        });

        let (build_row, phase_member) = match descriptor.role().phase() {
            Some(phase) => {
                let build_row = index
                    .build_files_for(name, &ref_ids)
                    .into_iter()
                    .find(|row| row.phase().map_or(true, |p| p == phase));
                let phase_member = index
                    .phases
                    .iter()
                    .filter(|p| p.phase == phase)
                    .flat_map(|p| &p.members.members)
                    .find(|m| match build_row {
                        Some(row) => m.id == row.id,
                        None => m.file_name() == Some(name),
                    });
                (build_row, phase_member)
            }
            None => (None, None),
        };

        let file_ref = ref_ids
            .first()
            .cloned()
            .or_else(|| group_member.map(|m| m.id.clone()))
            .or_else(|| build_row.and_then(|row| row.file_ref.clone()));
        let build_file = build_row
            .map(|row| row.id.clone())
            .or_else(|| phase_member.map(|m| m.id.clone()));

        Self {
            file_ref,
            build_file,
            has_ref_row: !ref_rows.is_empty(),
            has_build_row: build_row.is_some(),
            in_group: group_member.is_some(),
            in_phase: phase_member.is_some(),
        }
    }

    fn any(&self) -> bool {
        self.has_ref_row || self.has_build_row || self.in_group || self.in_phase
    }

    fn missing(&self, descriptor: &FileDescriptor) -> Vec<SectionKind> {
        let mut missing = Vec::new();
        if !self.has_ref_row {
            missing.push(SectionKind::FileReferences);
        }
        if descriptor.is_built() && !self.has_build_row {
            missing.push(SectionKind::BuildFiles);
        }
        if !self.in_group {
            missing.push(SectionKind::GroupMembership);
        }
        if descriptor.is_built() && !self.in_phase {
            missing.push(SectionKind::PhaseMembership);
        }
        missing
    }
}

/// Insertion point inside a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    After(usize),
    /// After the last remaining member, or into the empty list
    Tail,
}

/// Deletions and insertions against one list, flushed with separator fix-ups
struct ListEdit<'i> {
    list: &'i MemberList,
    style: EntryStyle,
    deleted: HashSet<usize>,
    inserts: Vec<(Slot, ObjectId, String)>,
}

impl<'i> ListEdit<'i> {
    fn new(list: &'i MemberList, style: EntryStyle) -> Self {
        Self {
            list,
            style,
            deleted: HashSet::new(),
            inserts: Vec::new(),
        }
    }

    fn survivors(&self) -> impl Iterator<Item = &'i Member> + '_ {
        let list: &'i MemberList = self.list;
        list.members
            .iter()
            .filter(move |m| !self.deleted.contains(&m.line))
    }

    /// Remaining member matching the anchor by id or by file name
    fn find(&self, anchor: &str, ids: &[ObjectId]) -> Option<&'i Member> {
        self.survivors()
            .find(|m| ids.contains(&m.id) || m.file_name() == Some(anchor))
    }

    fn delete(&mut self, member: &Member) {
        self.deleted.insert(member.line);
    }

    fn insert(&mut self, slot: Slot, id: ObjectId, comment: String) {
        self.inserts.push((slot, id, comment));
    }

    fn flush(self, doc: &ProjectDocument, plan: &mut EditPlan) {
        let survivors: Vec<&Member> = self.survivors().collect();
        let mut comma: HashMap<usize, bool> =
            survivors.iter().map(|m| (m.line, m.trailing_comma)).collect();

        // A removed comma-less last member hands its style to the new last member
        if let (Some(last), Some(new_last)) = (self.list.last(), survivors.last()) {
            if self.deleted.contains(&last.line) && !last.trailing_comma {
                comma.insert(new_last.line, false);
            }
        }

        let mut batches: Vec<(Option<usize>, Vec<(ObjectId, String)>)> = Vec::new();
        for (slot, id, comment) in self.inserts {
            let at = match slot {
                Slot::After(line) => Some(line),
                Slot::Tail => survivors.last().map(|m| m.line),
            };
            match batches.iter_mut().find(|(line, _)| *line == at) {
                Some((_, items)) => items.push((id, comment)),
                None => batches.push((at, vec![(id, comment)])),
            }
        }

        for (at, items) in batches {
            let last_comma = match at {
                Some(line) => comma.insert(line, true).unwrap_or(true),
                None => self.style.trailing_comma,
            };
            let count = items.len();
            let lines = items
                .iter()
                .enumerate()
                .map(|(i, (id, comment))| {
                    EntrySynthesizer::member(id, comment, &self.style.indent, i + 1 < count || last_comma)
                })
                .collect();
            match at {
                Some(line) => plan.insert_after(line, lines),
                None => plan.insert_before(self.list.span().footer, lines),
            }
        }

        for member in survivors {
            let wanted = comma.get(&member.line).copied().unwrap_or(member.trailing_comma);
            if wanted != member.trailing_comma {
                if let Some(text) = doc.line(member.line) {
                    plan.replace(member.line, with_comma(text, wanted));
                }
            }
        }
        for line in self.deleted {
            plan.delete(line);
        }
    }
}

fn allocate(ids: &mut dyn IdGenerator, existing: &mut HashSet<ObjectId>) -> PbxResult<ObjectId> {
    let id = ids.next_id(existing)?;
    existing.insert(id.clone());
    Ok(id)
}

fn ref_ids(index: &ProjectIndex, name: &str) -> Vec<ObjectId> {
    index
        .file_refs_named(name)
        .iter()
        .map(|row| row.id.clone())
        .collect()
}

fn build_ids(index: &ProjectIndex, name: &str) -> Vec<ObjectId> {
    index
        .build_files_for(name, &ref_ids(index, name))
        .iter()
        .map(|row| row.id.clone())
        .collect()
}

fn group_not_found(name: &str) -> PbxError {
    PbxError::SectionNotFound {
        section: SectionKind::GroupMembership,
        detail: format!("no group named '{}'", name),
    }
}

/// Set or strip the trailing `,` of a member line, keeping any trailing whitespace
fn with_comma(line: &str, wanted: bool) -> String {
    let body = line.trim_end();
    let eol = &line[body.len()..];
    let body = body.strip_suffix(',').unwrap_or(body);
    if wanted {
        format!("{body},{eol}")
    } else {
        format!("{body}{eol}")
    }
}
