//! Edit plan - the set of line edits one operation wants to make
//!
//! Operations compute a complete plan against a snapshot of the document and
//! then apply it once. Nothing scans and mutates at the same time.

use std::cmp::Reverse;

/// A single line-level edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    InsertAfter { line: usize, lines: Vec<String> },
    InsertBefore { line: usize, lines: Vec<String> },
    Replace { line: usize, text: String },
    Delete { line: usize },
}

impl LineEdit {
    fn line(&self) -> usize {
        match self {
            LineEdit::InsertAfter { line, .. }
            | LineEdit::InsertBefore { line, .. }
            | LineEdit::Replace { line, .. }
            | LineEdit::Delete { line } => *line,
        }
    }

    // Order for edits that share a line: content after the line first, the
    // line itself next, content before it last.
    fn rank(&self) -> u8 {
        match self {
            LineEdit::InsertAfter { .. } => 0,
            LineEdit::Replace { .. } => 1,
            LineEdit::Delete { .. } => 2,
            LineEdit::InsertBefore { .. } => 3,
        }
    }
}

/// Ordered collection of line edits against one document snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPlan {
    edits: Vec<LineEdit>,
}

impl EditPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert lines after `line`; repeated calls for the same line keep call order
    pub fn insert_after(&mut self, line: usize, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }
        for edit in &mut self.edits {
            if let LineEdit::InsertAfter { line: l, lines: existing } = edit {
                if *l == line {
                    existing.extend(lines);
                    return;
                }
            }
        }
        self.edits.push(LineEdit::InsertAfter { line, lines });
    }

    /// Insert lines before `line`; repeated calls for the same line keep call order
    pub fn insert_before(&mut self, line: usize, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }
        for edit in &mut self.edits {
            if let LineEdit::InsertBefore { line: l, lines: existing } = edit {
                if *l == line {
                    existing.extend(lines);
                    return;
                }
            }
        }
        self.edits.push(LineEdit::InsertBefore { line, lines });
    }

    /// Replace a line; the last replacement for a line wins
    pub fn replace(&mut self, line: usize, text: String) {
        for edit in &mut self.edits {
            if let LineEdit::Replace { line: l, text: existing } = edit {
                if *l == line {
                    *existing = text;
                    return;
                }
            }
        }
        self.edits.push(LineEdit::Replace { line, text });
    }

    pub fn delete(&mut self, line: usize) {
        if !self.deletes(line) {
            self.edits.push(LineEdit::Delete { line });
        }
    }

    pub fn deletes(&self, line: usize) -> bool {
        self.edits
            .iter()
            .any(|e| matches!(e, LineEdit::Delete { line: l } if *l == line))
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn edits(&self) -> &[LineEdit] {
        &self.edits
    }

    /// Edits sorted bottom-up, ready to apply
    pub(crate) fn into_ordered(self) -> Vec<LineEdit> {
        let mut edits = self.edits;
        edits.sort_by_key(|e| (Reverse(e.line()), e.rank()));
        edits
    }
}
