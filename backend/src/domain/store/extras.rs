//! Kind-specific state carried alongside a store's items.

use std::fmt::Debug;

use crate::domain::cache::NamespacedCache;
use crate::domain::entity_id::EntityId;
use crate::domain::shortlist::Shortlist;

/// Cache key (before namespacing) of the persisted shortlist.
pub const SHORTLIST_KEY: &str = "shortlist";

/// Extra state a store persists next to its entity list.
pub trait StoreExtras: Clone + Default + Debug + PartialEq + Send + Sync + 'static {
    /// Read persisted state, defaulting when absent or unreadable.
    fn restore(cache: &NamespacedCache) -> Self;

    /// Write the state to the cache.
    fn persist(&self, cache: &NamespacedCache);

    /// Remove persisted state from the cache.
    fn discard(cache: &NamespacedCache);

    /// Drop references to a deleted entity, returning whether anything changed.
    fn forget(&mut self, id: &EntityId) -> bool;
}

impl StoreExtras for () {
    fn restore(_cache: &NamespacedCache) -> Self {}

    fn persist(&self, _cache: &NamespacedCache) {}

    fn discard(_cache: &NamespacedCache) {}

    fn forget(&mut self, _id: &EntityId) -> bool {
        false
    }
}

impl StoreExtras for Shortlist {
    fn restore(cache: &NamespacedCache) -> Self {
        cache.get_or(SHORTLIST_KEY, Self::default())
    }

    fn persist(&self, cache: &NamespacedCache) {
        cache.set(SHORTLIST_KEY, self);
    }

    fn discard(cache: &NamespacedCache) {
        cache.remove(SHORTLIST_KEY);
    }

    fn forget(&mut self, id: &EntityId) -> bool {
        self.remove(id)
    }
}
