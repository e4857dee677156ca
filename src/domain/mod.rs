//! Domain Layer
//!
//! Line-level model of a `project.pbxproj` and the operations over it.
//!
//! ## Structure
//!
//! - `entities/` - document, edit plans, descriptors, reports
//! - `value_objects/` - identifiers, section kinds, roles, hashes
//! - `services/` - locator, synthesizer, patcher, repair, checker
//! - `ports/` - file system and backup boundaries
//!
//! Nothing in here touches the disk; the infrastructure layer implements the ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
