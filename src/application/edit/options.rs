//! Edit options

use std::collections::HashSet;

use crate::domain::entities::{FileDescriptor, Placement};
use crate::domain::services::{IdStrategy, PatchOptions, SectionLocator, SequentialScheme};

/// One requested change to the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add {
        files: Vec<FileDescriptor>,
        placement: Placement,
    },
    Remove {
        files: Vec<String>,
    },
    Move {
        files: Vec<String>,
        placement: Placement,
    },
    Repair,
    /// Remove source-tree files whose names are not in `present`
    Prune {
        present: HashSet<String>,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Remove { .. } => "remove",
            Operation::Move { .. } => "move",
            Operation::Repair => "repair",
            Operation::Prune { .. } => "prune",
        }
    }
}

/// Options for an edit run
#[derive(Debug, Clone)]
pub struct EditOptions {
    /// Compute the result and diff without writing anything
    pub dry_run: bool,
    /// Run the repair passes before the requested operations
    pub repair_first: bool,
    /// Write a backup sibling before committing
    pub backup: bool,
    pub locator: SectionLocator,
    pub patch: PatchOptions,
    pub id_strategy: IdStrategy,
    pub scheme: SequentialScheme,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            repair_first: false,
            backup: true,
            locator: SectionLocator::default(),
            patch: PatchOptions::default(),
            id_strategy: IdStrategy::default(),
            scheme: SequentialScheme::default(),
        }
    }
}

impl EditOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_repair_first(mut self, repair_first: bool) -> Self {
        self.repair_first = repair_first;
        self
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn with_locator(mut self, locator: SectionLocator) -> Self {
        self.locator = locator;
        self
    }

    pub fn with_patch_options(mut self, patch: PatchOptions) -> Self {
        self.patch = patch;
        self
    }

    /// Identifier strategy, and the scheme used when it is sequential
    pub fn with_ids(mut self, strategy: IdStrategy, scheme: SequentialScheme) -> Self {
        self.id_strategy = strategy;
        self.scheme = scheme;
        self
    }
}
