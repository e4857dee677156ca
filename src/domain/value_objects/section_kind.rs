//! The four logical sections kept in sync by every edit

use std::fmt;

use serde::Serialize;

/// One of the four interdependent regions of a project document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    /// `PBXBuildFile` table: one row per file compiled into a phase
    BuildFiles,
    /// `PBXFileReference` table: one row per physical file
    FileReferences,
    /// `children = (...)` list of a `PBXGroup`
    GroupMembership,
    /// `files = (...)` list of a build phase
    PhaseMembership,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::BuildFiles,
        SectionKind::FileReferences,
        SectionKind::GroupMembership,
        SectionKind::PhaseMembership,
    ];

    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::BuildFiles => "build-file table",
            SectionKind::FileReferences => "file-reference table",
            SectionKind::GroupMembership => "group membership",
            SectionKind::PhaseMembership => "build-phase membership",
        }
    }

    /// Whether the section is a `key = ( ... );` list rather than a marker table
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            SectionKind::GroupMembership | SectionKind::PhaseMembership
        )
    }

    /// Default indentation for entries of this section
    pub fn default_indent(&self) -> &'static str {
        if self.is_list() {
            "\t\t\t\t"
        } else {
            "\t\t"
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
