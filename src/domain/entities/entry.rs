//! Entry line parsing
//!
//! Table rows look like
//! `<id> /* <comment> */ = {isa = PBXBuildFile; fileRef = <id> /* <name> */; };`
//! and list members like `<id> /* <comment> */,`. Object headers share the
//! prefix and end in `= {`.

use crate::domain::value_objects::{BuildPhase, ObjectId};

/// One parsed entry line, borrowing from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine<'a> {
    pub indent: &'a str,
    pub id: ObjectId,
    pub comment: Option<&'a str>,
    /// Everything after the id and comment, leading whitespace removed
    pub rest: &'a str,
}

impl<'a> EntryLine<'a> {
    /// Parse a line that starts (after indentation) with an identifier
    pub fn parse(line: &'a str) -> Option<Self> {
        let body = line.trim_start_matches([' ', '\t']);
        let indent = &line[..line.len() - body.len()];

        let id = ObjectId::parse(body.get(..ObjectId::WIDTH)?)?;
        let after = &body[ObjectId::WIDTH..];
        match after.chars().next() {
            None | Some(' ') | Some('\t') | Some(',') | Some(';') => {}
            _ => return None,
        }

        let after = after.trim_start();
        let (comment, rest) = match after.strip_prefix("/*") {
            Some(open) => {
                let close = open.find("*/")?;
                (Some(open[..close].trim()), open[close + 2..].trim_start())
            }
            None => (None, after),
        };

        Some(Self {
            indent,
            id,
            comment,
            rest,
        })
    }

    /// `<id> /* ... */ = {` opening a multi-line object
    pub fn is_object_header(&self) -> bool {
        self.rest.trim_end() == "= {"
    }

    /// Single-line `= {isa = ...; };` table row
    pub fn is_table_row(&self) -> bool {
        self.rest.starts_with("= {") && self.rest.trim_end().ends_with("};")
    }

    /// Member of a parenthesized list (no `=` after the comment)
    pub fn is_member(&self) -> bool {
        !self.rest.starts_with('=')
    }

    pub fn has_trailing_comma(&self) -> bool {
        self.rest.trim_end().ends_with(',')
    }

    /// Value of `key = value;` inside the row payload, quotes stripped
    pub fn field(&self, key: &str) -> Option<&'a str> {
        field_value(self.rest, key)
    }

    /// Target of `fileRef = <id>` in a build-file row
    pub fn file_ref(&self) -> Option<ObjectId> {
        let value = self.field("fileRef")?;
        ObjectId::parse(value.get(..ObjectId::WIDTH)?)
    }

    /// File name named by the comment, without any `in <Phase>` suffix
    pub fn file_name(&self) -> Option<&'a str> {
        self.comment.map(|c| split_phase_comment(c).0)
    }
}

/// Split `Foo.swift in Sources` into (`Foo.swift`, Some(Sources))
pub fn split_phase_comment(comment: &str) -> (&str, Option<BuildPhase>) {
    match comment.rsplit_once(" in ") {
        Some((name, phase)) => match BuildPhase::from_comment_name(phase) {
            Some(phase) => (name, Some(phase)),
            None => (comment, None),
        },
        None => (comment, None),
    }
}

fn field_value<'a>(payload: &'a str, key: &str) -> Option<&'a str> {
    let needle = format!("{} = ", key);
    let mut search = 0;
    while let Some(pos) = payload[search..].find(&needle) {
        let start = search + pos;
        let boundary = start == 0
            || matches!(payload.as_bytes()[start - 1], b' ' | b'{' | b'\t' | b';');
        if boundary {
            let value = &payload[start + needle.len()..];
            if let Some(quoted) = value.strip_prefix('"') {
                let end = quoted.find('"')?;
                return Some(&quoted[..end]);
            }
            let end = value.find(';')?;
            return Some(value[..end].trim_end());
        }
        search = start + needle.len();
    }
    None
}
