//! Entry synthesizer
//!
//! Renders the text of new entries. Pure: identical inputs always give
//! byte-identical lines, with indentation taken from the section's siblings.

use crate::domain::entities::{DescriptorIds, EntryLine, FileDescriptor, ProjectDocument};
use crate::domain::value_objects::{BuildPhase, ObjectId, SectionKind};

use super::locator::SectionSpan;

/// Formatting discovered from a section's existing entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStyle {
    pub indent: String,
    /// Whether list members end in `,` (Xcode writes one after every member)
    pub trailing_comma: bool,
}

impl EntryStyle {
    /// Documented defaults for a section with no entries yet
    pub fn default_for(kind: SectionKind, trailing_comma: bool) -> Self {
        Self {
            indent: kind.default_indent().to_string(),
            trailing_comma,
        }
    }

    /// Take indentation from the first entry in the span, falling back to the default
    pub fn discover(doc: &ProjectDocument, span: &SectionSpan, trailing_comma: bool) -> Self {
        span.body
            .clone()
            .filter_map(|i| doc.line(i).and_then(EntryLine::parse))
            .map(|entry| Self {
                indent: entry.indent.to_string(),
                trailing_comma,
            })
            .next()
            .unwrap_or_else(|| Self::default_for(span.kind, trailing_comma))
    }
}

pub struct EntrySynthesizer;

impl EntrySynthesizer {
    /// Render the entry a descriptor owns in `kind`, or `None` if its role has none there
    pub fn render(
        kind: SectionKind,
        descriptor: &FileDescriptor,
        ids: &DescriptorIds,
        style: &EntryStyle,
    ) -> Option<String> {
        let name = descriptor.name();
        match kind {
            SectionKind::FileReferences => Some(Self::file_reference(name, &ids.file_ref, &style.indent)),
            SectionKind::GroupMembership => Some(Self::member(
                &ids.file_ref,
                name,
                &style.indent,
                style.trailing_comma,
            )),
            SectionKind::BuildFiles => {
                let phase = descriptor.role().phase()?;
                let build = ids.build_file.as_ref()?;
                Some(Self::build_file(name, phase, build, &ids.file_ref, &style.indent))
            }
            SectionKind::PhaseMembership => {
                let phase = descriptor.role().phase()?;
                let build = ids.build_file.as_ref()?;
                Some(Self::member(
                    build,
                    &phase_comment(name, phase),
                    &style.indent,
                    style.trailing_comma,
                ))
            }
        }
    }

    pub fn build_file(
        name: &str,
        phase: BuildPhase,
        build: &ObjectId,
        file_ref: &ObjectId,
        indent: &str,
    ) -> String {
        format!(
            "{indent}{build} /* {comment} */ = {{isa = PBXBuildFile; fileRef = {file_ref} /* {name} */; }};",
            comment = phase_comment(name, phase),
        )
    }

    pub fn file_reference(name: &str, file_ref: &ObjectId, indent: &str) -> String {
        format!(
            "{indent}{file_ref} /* {name} */ = {{isa = PBXFileReference; lastKnownFileType = {kind}; path = {path}; sourceTree = \"<group>\"; }};",
            kind = file_type(name),
            path = quote_if_needed(name),
        )
    }

    pub fn member(id: &ObjectId, comment: &str, indent: &str, trailing_comma: bool) -> String {
        let comma = if trailing_comma { "," } else { "" };
        format!("{indent}{id} /* {comment} */{comma}")
    }
}

/// `Foo.swift in Sources`
pub fn phase_comment(name: &str, phase: BuildPhase) -> String {
    format!("{} in {}", name, phase.comment_name())
}

/// `lastKnownFileType` for a file name
pub fn file_type(name: &str) -> &'static str {
    let extension = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or_default();
    match extension {
        "swift" => "sourcecode.swift",
        "m" => "sourcecode.c.objc",
        "mm" => "sourcecode.cpp.objcpp",
        "c" => "sourcecode.c.c",
        "cpp" | "cc" | "cxx" => "sourcecode.cpp.cpp",
        "h" => "sourcecode.c.h",
        "hpp" => "sourcecode.cpp.h",
        "metal" => "sourcecode.metal",
        "storyboard" => "file.storyboard",
        "xib" => "file.xib",
        "xcassets" => "folder.assetcatalog",
        "strings" => "text.plist.strings",
        "plist" => "text.plist.xml",
        "json" => "text.json",
        "png" => "image.png",
        "jpg" | "jpeg" => "image.jpeg",
        "wav" => "audio.wav",
        "mp3" => "audio.mp3",
        "xcdatamodeld" => "wrapper.xcdatamodel",
        "entitlements" => "text.plist.entitlements",
        "md" => "net.daringfireball.markdown",
        _ => "text",
    }
}

/// Quote a path the way Xcode does when it contains characters outside `[A-Za-z0-9_.$/-]`
pub fn quote_if_needed(value: &str) -> String {
    let bare = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | '/' | '-'));
    if bare {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}
