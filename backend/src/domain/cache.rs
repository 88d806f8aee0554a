//! Namespaced JSON cache over a [`KeyValueStore`].
//!
//! Every key is stored under a fixed prefix so `clear_all` can drop the
//! panel's entries without touching anything else in the same store. The
//! cache never returns errors: failures are logged and degrade to "absent" or
//! to a no-op, and callers must tolerate stale or default data.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use super::ports::KeyValueStore;

/// Prefix applied to every key unless configured otherwise.
pub const DEFAULT_KEY_PREFIX: &str = "hr-panel-";

/// JSON cache whose keys share one namespace prefix.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use hr_panel::domain::NamespacedCache;
/// use hr_panel::outbound::storage::MemoryKeyValueStore;
///
/// let cache = NamespacedCache::new(Arc::new(MemoryKeyValueStore::default()));
/// cache.set("answer", &42_u32);
/// assert_eq!(cache.get::<u32>("answer"), Some(42));
/// assert_eq!(cache.get_or("missing", 7_u32), 7);
/// ```
#[derive(Clone)]
pub struct NamespacedCache {
    store: Arc<dyn KeyValueStore>,
    prefix: String,
}

impl NamespacedCache {
    /// Wrap `store` using [`DEFAULT_KEY_PREFIX`].
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_prefix(store, DEFAULT_KEY_PREFIX)
    }

    /// Wrap `store` using a custom namespace prefix.
    pub fn with_prefix(store: Arc<dyn KeyValueStore>, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    /// Namespace prefix applied to every key.
    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    /// Serialise `value` and store it under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let full_key = self.namespaced(key);
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(key = %full_key, error = %err, "failed to serialise cache entry");
                return;
            }
        };
        if let Err(err) = self.store.write(&full_key, &encoded) {
            error!(key = %full_key, error = %err, "failed to write cache entry");
        }
    }

    /// Read and parse the value under `key`.
    ///
    /// Absent entries, read failures and unparsable JSON all yield `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let full_key = self.namespaced(key);
        let raw = match self.store.read(&full_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %full_key, "cache miss");
                return None;
            }
            Err(err) => {
                error!(key = %full_key, error = %err, "failed to read cache entry");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key = %full_key, error = %err, "failed to parse cache entry");
                None
            }
        }
    }

    /// Read the value under `key`, or `default` when it cannot be produced.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Delete the entry under `key`.
    pub fn remove(&self, key: &str) {
        let full_key = self.namespaced(key);
        if let Err(err) = self.store.remove(&full_key) {
            error!(key = %full_key, error = %err, "failed to remove cache entry");
        }
    }

    /// Delete every entry in this namespace, leaving other keys untouched.
    pub fn clear_all(&self) {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(err) => {
                error!(prefix = %self.prefix, error = %err, "failed to list cache entries");
                return;
            }
        };
        let mut removed = 0_usize;
        for key in keys.iter().filter(|key| key.starts_with(&self.prefix)) {
            match self.store.remove(key) {
                Ok(()) => removed = removed.saturating_add(1),
                Err(err) => error!(key = %key, error = %err, "failed to remove cache entry"),
            }
        }
        debug!(prefix = %self.prefix, count = removed, "cleared cache namespace");
    }

    /// Returns `true` when an entry exists under `key`.
    pub fn has(&self, key: &str) -> bool {
        let full_key = self.namespaced(key);
        match self.store.read(&full_key) {
            Ok(value) => value.is_some(),
            Err(err) => {
                error!(key = %full_key, error = %err, "failed to check cache entry");
                false
            }
        }
    }
}

impl std::fmt::Debug for NamespacedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamespacedCache")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::ports::{KeyValueStoreError, MockKeyValueStore};
    use crate::outbound::storage::MemoryKeyValueStore;

    #[fixture]
    fn memory() -> Arc<MemoryKeyValueStore> {
        Arc::new(MemoryKeyValueStore::default())
    }

    fn failing_store() -> MockKeyValueStore {
        let mut store = MockKeyValueStore::new();
        store
            .expect_read()
            .returning(|_| Err(KeyValueStoreError::io("unavailable")));
        store
            .expect_write()
            .returning(|_, _| Err(KeyValueStoreError::io("quota exceeded")));
        store
            .expect_remove()
            .returning(|_| Err(KeyValueStoreError::io("read-only")));
        store
            .expect_keys()
            .returning(|| Err(KeyValueStoreError::io("unavailable")));
        store
    }

    #[rstest]
    fn set_writes_json_under_prefixed_key(memory: Arc<MemoryKeyValueStore>) {
        let cache = NamespacedCache::new(memory.clone());
        cache.set("jobs", &vec!["a", "b"]);
        assert_eq!(
            memory.read("hr-panel-jobs").expect("read"),
            Some(r#"["a","b"]"#.to_owned())
        );
    }

    #[rstest]
    fn get_returns_none_for_absent_key(memory: Arc<MemoryKeyValueStore>) {
        let cache = NamespacedCache::new(memory);
        assert_eq!(cache.get::<Vec<String>>("jobs"), None);
        assert!(!cache.has("jobs"));
    }

    #[rstest]
    fn unparsable_entries_fall_back_to_default(memory: Arc<MemoryKeyValueStore>) {
        memory.write("hr-panel-jobs", "{not json").expect("write");
        let cache = NamespacedCache::new(memory);
        assert_eq!(cache.get::<Vec<String>>("jobs"), None);
        assert_eq!(cache.get_or("jobs", vec!["fallback".to_owned()]), vec!["fallback"]);
        assert!(cache.has("jobs"));
    }

    #[rstest]
    fn clear_all_leaves_foreign_keys(memory: Arc<MemoryKeyValueStore>) {
        memory.write("other-app-theme", "\"dark\"").expect("write");
        let cache = NamespacedCache::new(memory.clone());
        cache.set("jobs", &1_u8);
        cache.set("shortlist", &2_u8);

        cache.clear_all();

        assert!(!cache.has("jobs"));
        assert!(!cache.has("shortlist"));
        assert_eq!(memory.keys().expect("keys"), vec!["other-app-theme"]);
    }

    #[rstest]
    fn custom_prefix_isolates_namespaces(memory: Arc<MemoryKeyValueStore>) {
        let first = NamespacedCache::with_prefix(memory.clone(), "one-");
        let second = NamespacedCache::with_prefix(memory, "two-");
        first.set("jobs", &1_u8);
        second.set("jobs", &2_u8);

        first.clear_all();

        assert_eq!(first.get::<u8>("jobs"), None);
        assert_eq!(second.get::<u8>("jobs"), Some(2));
    }

    #[rstest]
    fn failures_never_surface() {
        let cache = NamespacedCache::new(Arc::new(failing_store()));
        cache.set("jobs", &1_u8);
        cache.remove("jobs");
        cache.clear_all();
        assert_eq!(cache.get::<u8>("jobs"), None);
        assert_eq!(cache.get_or("jobs", 3_u8), 3);
        assert!(!cache.has("jobs"));
    }

    #[rstest]
    fn remove_targets_the_namespaced_key() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_remove()
            .withf(|key: &str| key == "hr-panel-shortlist")
            .times(1)
            .returning(|_| Ok(()));
        let cache = NamespacedCache::new(Arc::new(store));
        cache.remove("shortlist");
    }
}
