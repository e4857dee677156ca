//! Identifier generation
//!
//! Both strategies emit 24-digit uppercase hex tokens so generated entries look
//! exactly like the ones Xcode writes. The caller owns the `existing` set and
//! must insert every returned token before asking for the next one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ObjectId;
use crate::error::{PbxError, PbxResult};

/// Source of fresh identifiers
pub trait IdGenerator {
    /// Return a token that is not in `existing`
    fn next_id(&mut self, existing: &HashSet<ObjectId>) -> PbxResult<ObjectId>;
}

/// Which generator to build
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Random,
    Sequential,
}

/// Random 96-bit tokens taken from v4 UUIDs; resampled on collision
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self, existing: &HashSet<ObjectId>) -> PbxResult<ObjectId> {
        loop {
            let candidate = ObjectId::from_bits(uuid::Uuid::new_v4().as_u128());
            if !existing.contains(&candidate) {
                return Ok(candidate);
            }
            tracing::debug!(%candidate, "random identifier collided, resampling");
        }
    }
}

/// `prefix + zero-padded decimal counter + suffix`, 24 hex digits in total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequentialScheme {
    pub prefix: String,
    pub width: usize,
    pub suffix: String,
}

impl Default for SequentialScheme {
    fn default() -> Self {
        Self {
            prefix: "1A0000".to_string(),
            width: 4,
            suffix: "A0000000000001".to_string(),
        }
    }
}

impl SequentialScheme {
    pub fn validate(&self) -> PbxResult<()> {
        let total = self.prefix.len() + self.width + self.suffix.len();
        if total != ObjectId::WIDTH {
            return Err(PbxError::InvalidIdScheme {
                reason: format!(
                    "prefix ({}) + width ({}) + suffix ({}) must be {} digits, got {}",
                    self.prefix.len(),
                    self.width,
                    self.suffix.len(),
                    ObjectId::WIDTH,
                    total
                ),
            });
        }
        if self.width == 0 || self.width > 18 {
            return Err(PbxError::InvalidIdScheme {
                reason: format!("counter width must be between 1 and 18, got {}", self.width),
            });
        }
        let fixed = format!("{}{}", self.prefix, self.suffix);
        if !fixed.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)) {
            return Err(PbxError::InvalidIdScheme {
                reason: format!(
                    "prefix and suffix must be uppercase hex, got '{}' / '{}'",
                    self.prefix, self.suffix
                ),
            });
        }
        Ok(())
    }

    /// Counter value of a token produced by this scheme
    pub fn counter_of(&self, id: &ObjectId) -> Option<u64> {
        let middle = id
            .as_str()
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;
        if middle.len() != self.width || !middle.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        middle.parse().ok()
    }

    fn render(&self, counter: u64) -> Option<ObjectId> {
        let middle = format!("{:0width$}", counter, width = self.width);
        if middle.len() > self.width {
            return None;
        }
        ObjectId::parse(&format!("{}{}{}", self.prefix, middle, self.suffix))
    }
}

impl std::fmt::Display for SequentialScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.prefix, "N".repeat(self.width), self.suffix)
    }
}

/// Max-plus-one over every existing token that matches the scheme
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    scheme: SequentialScheme,
}

impl SequentialIdGenerator {
    pub fn new(scheme: SequentialScheme) -> PbxResult<Self> {
        scheme.validate()?;
        Ok(Self { scheme })
    }

    pub fn scheme(&self) -> &SequentialScheme {
        &self.scheme
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, existing: &HashSet<ObjectId>) -> PbxResult<ObjectId> {
        let max = existing
            .iter()
            .filter_map(|id| self.scheme.counter_of(id))
            .max()
            .unwrap_or(0);

        max.checked_add(1)
            .and_then(|next| self.scheme.render(next))
            .ok_or_else(|| PbxError::IdSpaceExhausted {
                scheme: self.scheme.to_string(),
            })
    }
}

/// Build the generator selected by configuration
pub fn build_generator(
    strategy: IdStrategy,
    scheme: &SequentialScheme,
) -> PbxResult<Box<dyn IdGenerator>> {
    Ok(match strategy {
        IdStrategy::Random => Box::new(RandomIdGenerator),
        IdStrategy::Sequential => Box::new(SequentialIdGenerator::new(scheme.clone())?),
    })
}

/// Identifiers for one edit. Every token the document started with and every
/// token handed out since stays taken, so ids freed by a removal are never
/// issued again before the edit is committed.
pub struct EditIds {
    inner: Box<dyn IdGenerator>,
    taken: HashSet<ObjectId>,
}

impl EditIds {
    pub fn new(inner: Box<dyn IdGenerator>, initial: impl IntoIterator<Item = ObjectId>) -> Self {
        Self {
            inner,
            taken: initial.into_iter().collect(),
        }
    }

    pub fn taken(&self) -> &HashSet<ObjectId> {
        &self.taken
    }
}

impl IdGenerator for EditIds {
    fn next_id(&mut self, existing: &HashSet<ObjectId>) -> PbxResult<ObjectId> {
        if !existing.is_subset(&self.taken) {
            self.taken.extend(existing.iter().cloned());
        }
        let id = self.inner.next_id(&self.taken)?;
        self.taken.insert(id.clone());
        Ok(id)
    }
}
