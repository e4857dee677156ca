//! Domain Entities
//!
//! The project document, the edit plans applied to it, and the records that
//! describe what an operation did.

mod descriptor;
mod document;
mod edit_plan;
mod entry;
mod report;

pub use descriptor::{DescriptorIds, FileDescriptor, Placement};
pub use document::ProjectDocument;
pub use edit_plan::{EditPlan, LineEdit};
pub use entry::{split_phase_comment, EntryLine};
pub use report::{Change, Diagnostic, DiagnosticKind, PatchReport, Severity};
