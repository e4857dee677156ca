//! Domain Services
//!
//! Everything that reads or rewrites project text. No I/O: callers hand in a
//! `ProjectDocument` and an identifier generator and get a report back.

mod id_generator;
mod index;
mod locator;
mod patcher;
mod repair;
mod synthesizer;
mod verify;

#[cfg(test)]
pub(crate) mod fixtures;

pub use id_generator::{
    build_generator, EditIds, IdGenerator, IdStrategy, RandomIdGenerator, SequentialIdGenerator,
    SequentialScheme,
};
pub use index::{Member, MemberList, PhaseList, ProjectIndex, TableRow};
pub use locator::{ListSpan, SectionLocator, SectionSpan, SectionTarget};
pub use patcher::{IntegrityPatcher, PatchOptions};
pub use repair::ProjectRepairer;
pub use synthesizer::{file_type, phase_comment, quote_if_needed, EntryStyle, EntrySynthesizer};
pub use verify::ConsistencyChecker;
