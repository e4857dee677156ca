//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;

pub use local::LocalFs;
#[cfg(test)]
pub use memory::MemoryFs;
