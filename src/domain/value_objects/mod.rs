//! Domain Value Objects
//!
//! Immutable value types shared by every layer.

mod file_role;
mod hash;
mod object_id;
mod section_kind;

pub use file_role::{BuildPhase, FileRole};
pub use hash::ContentHash;
pub use object_id::{scan_ids, ObjectId};
pub use section_kind::SectionKind;
