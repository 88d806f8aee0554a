//! Port abstraction for the canonical dataset a store falls back to.
//!
//! Stores read from their cache first; when it is empty they fetch the full
//! list from an [`EntitySource`] and persist it.

use super::define_port_error;

define_port_error! {
    /// Errors raised while producing a source dataset.
    pub enum EntitySourceError {
        /// A generated or imported record failed domain validation.
        InvalidRecord { message: String } => "invalid source record: {message}",
        /// The source could not be reached.
        Unavailable { message: String } => "entity source unavailable: {message}",
    }
}

/// Provider of the canonical list for one entity kind.
pub trait EntitySource<E>: Send + Sync {
    /// Produce every entity, in display order.
    fn fetch_all(&self) -> Result<Vec<E>, EntitySourceError>;
}

/// Fixture source serving a fixed list.
#[derive(Debug, Clone)]
pub struct FixtureEntitySource<E> {
    items: Vec<E>,
}

impl<E> FixtureEntitySource<E> {
    /// Serve `items` on every fetch.
    pub fn new(items: Vec<E>) -> Self {
        Self { items }
    }
}

impl<E> Default for FixtureEntitySource<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Clone + Send + Sync> EntitySource<E> for FixtureEntitySource<E> {
    fn fetch_all(&self) -> Result<Vec<E>, EntitySourceError> {
        Ok(self.items.clone())
    }
}
