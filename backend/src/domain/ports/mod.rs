//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod entity_source;
mod key_value_store;

pub use entity_source::{EntitySource, EntitySourceError, FixtureEntitySource};
#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
pub use key_value_store::{KeyValueStore, KeyValueStoreError};
