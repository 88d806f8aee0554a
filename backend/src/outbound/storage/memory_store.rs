//! In-memory key-value store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

/// Key-value store held in a sorted map.
///
/// A poisoned lock is recovered rather than reported; every operation leaves
/// the map consistent before it can panic.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        self.lock().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, KeyValueStoreError> {
        Ok(self.lock().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn write_then_read_returns_latest_value() {
        let store = MemoryKeyValueStore::default();
        store.write("k", "one").expect("write");
        store.write("k", "two").expect("write");
        assert_eq!(store.read("k"), Ok(Some("two".to_owned())));
    }

    #[rstest]
    fn removing_absent_key_succeeds() {
        let store = MemoryKeyValueStore::default();
        assert_eq!(store.remove("missing"), Ok(()));
    }

    #[rstest]
    fn keys_are_sorted() {
        let store = MemoryKeyValueStore::default();
        store.write("b", "2").expect("write");
        store.write("a", "1").expect("write");
        assert_eq!(store.keys(), Ok(vec!["a".to_owned(), "b".to_owned()]));
    }
}
