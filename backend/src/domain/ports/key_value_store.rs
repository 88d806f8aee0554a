//! Port abstraction for the persistent key-value store behind the cache.
//!
//! Values are opaque text; namespacing and JSON encoding live in
//! [`NamespacedCache`](crate::domain::NamespacedCache). Adapters decide how
//! keys map onto their medium.

use super::define_port_error;

define_port_error! {
    /// Errors raised by key-value store adapters.
    pub enum KeyValueStoreError {
        /// Reading or writing the underlying medium failed.
        Io { message: String } => "key-value store I/O failed: {message}",
        /// The key cannot be represented by the adapter.
        InvalidKey { message: String } => "invalid key-value store key: {message}",
    }
}

/// Synchronous, process-local key-value persistence.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;

    /// Every key currently stored, in no particular order.
    fn keys(&self) -> Result<Vec<String>, KeyValueStoreError>;
}
