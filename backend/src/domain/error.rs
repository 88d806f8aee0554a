//! Domain-level error types shared by the entity stores.
//!
//! Persistence failures never reach this layer: the namespaced cache logs and
//! absorbs them. What remains are failures the caller can act on.

use thiserror::Error;

/// Errors returned by mutating store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Every generated identifier collided with an existing entity.
    #[error("could not generate a unique {entity} id after {attempts} attempts")]
    IdGenerationExhausted {
        /// Entity kind being added.
        entity: &'static str,
        /// Number of identifiers drawn before giving up.
        attempts: usize,
    },
}

/// Error returned when parsing a lowercase enum label fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`; expected one of: {expected}")]
pub struct UnknownValueError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl UnknownValueError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            expected,
        }
    }
}
