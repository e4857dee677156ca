//! File descriptor entity - the unit users add, move, and remove

use crate::domain::value_objects::{FileRole, ObjectId};

/// A file name plus the role it plays in the build
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileDescriptor {
    name: String,
    role: FileRole,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, role: FileRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// Compiled source file
    pub fn compile(name: impl Into<String>) -> Self {
        Self::new(name, FileRole::Compile)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> FileRole {
        self.role
    }

    /// Whether the descriptor owns a build-file row and a phase membership
    pub fn is_built(&self) -> bool {
        self.role.phase().is_some()
    }
}

/// Identifiers derived from one descriptor; never shared between descriptors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorIds {
    pub file_ref: ObjectId,
    pub build_file: Option<ObjectId>,
}

/// Where new or moved group members go
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    /// Group name (inline comment) or bare group identifier
    pub group: Option<String>,
    /// Existing file to insert after
    pub after: Option<String>,
}

impl Placement {
    pub fn group(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            after: None,
        }
    }

    pub fn after(mut self, anchor: impl Into<String>) -> Self {
        self.after = Some(anchor.into());
        self
    }
}
