//! Opaque entity identifiers and the generators that mint them.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of base-36 characters in a generated identifier.
pub const GENERATED_ID_LENGTH: usize = 9;

const ID_RADIX: u32 = 36;

/// Validation errors returned by [`EntityId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityIdValidationError {
    /// The identifier was empty.
    #[error("entity id must not be empty")]
    Empty,
    /// The identifier carried leading or trailing whitespace.
    #[error("entity id must not have surrounding whitespace")]
    SurroundingWhitespace,
}

/// Identifier shared by jobs and candidates.
///
/// Identifiers are opaque: generated ones are short base-36 tokens, imported
/// ones may be any non-empty string without surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Validate and construct an [`EntityId`].
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_panel::domain::EntityId;
    ///
    /// let id = EntityId::new("k3f9a0z1q").expect("valid id");
    /// assert_eq!(id.as_str(), "k3f9a0z1q");
    /// assert!(EntityId::new(" padded ").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, EntityIdValidationError> {
        Self::from_owned(id.into())
    }

    fn from_owned(id: String) -> Result<Self, EntityIdValidationError> {
        if id.is_empty() {
            return Err(EntityIdValidationError::Empty);
        }
        if id.trim() != id {
            return Err(EntityIdValidationError::SurroundingWhitespace);
        }
        Ok(Self(id))
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl TryFrom<String> for EntityId {
    type Error = EntityIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

impl TryFrom<&str> for EntityId {
    type Error = EntityIdValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Source of fresh identifiers for newly added entities.
///
/// Generators only need negligible collision probability across a single
/// dataset; stores retry on collision with existing ids.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier.
    fn next_id(&self) -> EntityId;
}

/// Draws identifiers from the thread-local random generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> EntityId {
        EntityId(base36_token(&mut rand::thread_rng()))
    }
}

/// Produces a reproducible identifier sequence from a fixed seed.
///
/// # Examples
///
/// ```
/// use hr_panel::domain::{IdGenerator, SeededIdGenerator};
///
/// let a = SeededIdGenerator::new(7);
/// let b = SeededIdGenerator::new(7);
/// assert_eq!(a.next_id(), b.next_id());
/// ```
#[derive(Debug)]
pub struct SeededIdGenerator {
    rng: Mutex<SmallRng>,
}

impl SeededIdGenerator {
    /// Create a generator whose sequence is determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl IdGenerator for SeededIdGenerator {
    fn next_id(&self) -> EntityId {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        EntityId(base36_token(&mut *rng))
    }
}

fn base36_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..GENERATED_ID_LENGTH)
        .filter_map(|_| char::from_digit(rng.gen_range(0..ID_RADIX), ID_RADIX))
        .collect()
}
