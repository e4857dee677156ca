//! File role value object - decides which build phase a file joins

use serde::{Deserialize, Serialize};

/// What the project does with a file
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    /// Compiled by the Sources build phase
    #[default]
    Compile,
    /// Copied by the Resources build phase
    Resource,
    /// Listed in the navigator only (headers, plists, docs)
    Reference,
}

impl FileRole {
    /// The build phase this role is a member of, if any
    pub fn phase(&self) -> Option<BuildPhase> {
        match self {
            FileRole::Compile => Some(BuildPhase::Sources),
            FileRole::Resource => Some(BuildPhase::Resources),
            FileRole::Reference => None,
        }
    }
}

impl std::fmt::Display for FileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileRole::Compile => write!(f, "compile"),
            FileRole::Resource => write!(f, "resource"),
            FileRole::Reference => write!(f, "reference"),
        }
    }
}

/// Build phases that own file membership lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildPhase {
    Sources,
    Resources,
}

impl BuildPhase {
    pub const ALL: [BuildPhase; 2] = [BuildPhase::Sources, BuildPhase::Resources];

    /// `isa` of the phase object, also the name of its marker section
    pub fn isa(&self) -> &'static str {
        match self {
            BuildPhase::Sources => "PBXSourcesBuildPhase",
            BuildPhase::Resources => "PBXResourcesBuildPhase",
        }
    }

    /// Name used in inline comments (`Foo.swift in Sources`)
    pub fn comment_name(&self) -> &'static str {
        match self {
            BuildPhase::Sources => "Sources",
            BuildPhase::Resources => "Resources",
        }
    }

    pub fn from_comment_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.comment_name() == name)
    }
}
