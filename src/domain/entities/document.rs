//! Project document entity
//!
//! The whole `project.pbxproj` text as an ordered list of lines. Nothing here
//! understands pbxproj structure; the locator and index read it, and edit plans
//! are the only way it changes.

use super::edit_plan::{EditPlan, LineEdit};

/// In-memory project document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDocument {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl ProjectDocument {
    /// Split text into lines, remembering whether it ended with a newline.
    ///
    /// Only `\n` separates lines so a stray `\r` survives a round trip.
    pub fn parse(text: &str) -> Self {
        let trailing_newline = text.ends_with('\n');
        let body = text.strip_suffix('\n').unwrap_or(text);
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            body.split('\n').map(str::to_string).collect()
        };
        Self {
            lines,
            trailing_newline,
        }
    }

    /// Serialize back to text
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.trailing_newline {
            text.push('\n');
        }
        text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Apply every edit of a plan in one pass.
    ///
    /// Line numbers in the plan refer to the document as it was when the plan
    /// was computed; edits run bottom-up so earlier indices stay valid.
    pub fn apply(&mut self, plan: EditPlan) {
        for edit in plan.into_ordered() {
            match edit {
                LineEdit::InsertAfter { line, lines } => {
                    let at = (line + 1).min(self.lines.len());
                    self.lines.splice(at..at, lines);
                }
                LineEdit::InsertBefore { line, lines } => {
                    let at = line.min(self.lines.len());
                    self.lines.splice(at..at, lines);
                }
                LineEdit::Replace { line, text } => {
                    if let Some(slot) = self.lines.get_mut(line) {
                        *slot = text;
                    }
                }
                LineEdit::Delete { line } => {
                    if line < self.lines.len() {
                        self.lines.remove(line);
                    }
                }
            }
        }
    }
}
