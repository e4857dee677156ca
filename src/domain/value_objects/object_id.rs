//! Object identifier value object
//!
//! Every object in a pbxproj file is named by a 24-digit uppercase hex token.
//! Machine-generated and hand-written identifiers share the same format.

use std::fmt;

use serde::{Serialize, Serializer};

/// A validated 24-digit uppercase hexadecimal identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Number of hex digits in an identifier
    pub const WIDTH: usize = 24;

    /// Parse an identifier, rejecting anything that is not exactly 24 uppercase hex digits
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() == Self::WIDTH && s.bytes().all(is_id_byte) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }

    /// Build an identifier from the low 96 bits of a number
    pub fn from_bits(bits: u128) -> Self {
        let masked = bits & ((1u128 << 96) - 1);
        Self(format!("{:024X}", masked))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

fn is_id_byte(b: u8) -> bool {
    b.is_ascii_digit() || (b'A'..=b'F').contains(&b)
}

/// Scan a line for every identifier-shaped token.
///
/// Tokens must be delimited by non-alphanumeric characters so that longer hex
/// runs (e.g. hashes inside build settings) are not split into false matches.
pub fn scan_ids(line: &str) -> Vec<ObjectId> {
    let bytes = line.as_bytes();
    let mut ids = Vec::new();
    let mut start = 0;

    while start < bytes.len() {
        if !bytes[start].is_ascii_alphanumeric() {
            start += 1;
            continue;
        }
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_alphanumeric() {
            end += 1;
        }
        if let Some(id) = ObjectId::parse(&line[start..end]) {
            ids.push(id);
        }
        start = end;
    }

    ids
}
