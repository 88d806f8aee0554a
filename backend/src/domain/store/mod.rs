//! Observable entity stores.
//!
//! One generic [`EntityStore`] serves both jobs and candidates. Each store
//! exclusively owns its [`StoreState`]; every operation that changes it first
//! persists through the [`NamespacedCache`] and then publishes a new immutable
//! snapshot to subscribers.
//!
//! Loading prefers the cached list and only falls back to the
//! [`EntitySource`] when the cache is empty. There is no background refresh:
//! once a list is cached, local edits are never overwritten by regenerated
//! source data.

mod candidate;
mod extras;

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{debug, info, warn};

pub use self::extras::StoreExtras;
use super::cache::NamespacedCache;
use super::candidate::Candidate;
use super::entity::Entity;
use super::entity_id::{EntityId, IdGenerator, RandomIdGenerator};
use super::error::StoreError;
use super::filter::FilterOptions;
use super::job::Job;
use super::observable::{Observable, SubscriptionId};
use super::ports::EntitySource;
use super::shortlist::Shortlist;

/// How many identifiers `add` draws before giving up on collisions.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Snapshot of a store.
///
/// `extras` carries per-kind state: nothing for jobs, the [`Shortlist`] for
/// candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<E, X = ()> {
    /// Entities in display order.
    pub items: Vec<E>,
    /// A load is in progress.
    pub loading: bool,
    /// Message from the last failed load.
    pub error: Option<String>,
    /// Active filter criteria.
    pub filters: FilterOptions,
    /// Kind-specific state.
    pub extras: X,
}

impl<E, X: Default> Default for StoreState<E, X> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            filters: FilterOptions::default(),
            extras: X::default(),
        }
    }
}

impl<E: Entity, X> StoreState<E, X> {
    /// Items satisfying every active filter, in list order.
    pub fn filtered(&self) -> Vec<E> {
        self.items
            .iter()
            .filter(|item| item.matches(&self.filters))
            .cloned()
            .collect()
    }

    /// First item with the given identifier.
    pub fn find(&self, id: &EntityId) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }
}

/// Store for job postings.
pub type JobStore = EntityStore<Job>;

/// Store for candidates, carrying the shortlist.
pub type CandidateStore = EntityStore<Candidate, Shortlist>;

/// Owned, observable state container for one entity kind.
pub struct EntityStore<E: Entity, X: StoreExtras = ()> {
    state: Observable<StoreState<E, X>>,
    cache: Arc<NamespacedCache>,
    source: Arc<dyn EntitySource<E>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl<E: Entity, X: StoreExtras> EntityStore<E, X> {
    /// Create an empty store persisting through `cache` and falling back to
    /// `source` when the cache holds nothing.
    ///
    /// Identifiers come from [`RandomIdGenerator`] and timestamps from the
    /// system clock until replaced with the `with_*` builders.
    pub fn new(cache: Arc<NamespacedCache>, source: Arc<dyn EntitySource<E>>) -> Self {
        Self {
            state: Observable::new(StoreState::default()),
            cache,
            source,
            ids: Arc::new(RandomIdGenerator),
            clock: Arc::new(DefaultClock),
        }
    }

    /// Replace the identifier generator.
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Replace the clock used for timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<StoreState<E, X>> {
        self.state.snapshot()
    }

    /// Borrow the current state.
    pub fn state(&self) -> &StoreState<E, X> {
        self.state.current()
    }

    /// Observe state changes. The current snapshot is delivered immediately.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&Arc<StoreState<E, X>>) + Send + 'static,
    {
        self.state.subscribe(subscriber)
    }

    /// Stop observing. Returns `false` for an unknown subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Populate the store from the cache, or from the source when the cache
    /// holds no entities.
    ///
    /// Cached records that fail validation are skipped. A cached entry that is
    /// present but is not a JSON array is left in place and reported in
    /// [`StoreState::error`], so the source never overwrites it.
    /// A source failure is recorded in [`StoreState::error`] and leaves the
    /// items untouched. `loading` is always `false` afterwards.
    pub fn load(&mut self) {
        self.state.update(|state| {
            state.loading = true;
            state.error = None;
        });

        let extras = X::restore(&self.cache);
        let Some(records) = self.cache.get::<Vec<serde_json::Value>>(E::CACHE_KEY) else {
            if self.cache.has(E::CACHE_KEY) {
                warn!(entity = E::KIND, "cached list is unreadable; leaving it in place");
                self.state.update(|state| {
                    state.loading = false;
                    state.error = Some(format!("cached {} list is unreadable", E::KIND));
                });
                return;
            }
            self.load_from_source(extras);
            return;
        };
        if records.is_empty() {
            self.load_from_source(extras);
            return;
        }

        let cached = decode_records::<E>(records);
        info!(entity = E::KIND, count = cached.len(), "loaded from cache");
        self.install(cached, extras);
    }

    fn load_from_source(&mut self, extras: X) {
        match self.source.fetch_all() {
            Ok(items) => {
                info!(entity = E::KIND, count = items.len(), "loaded from source");
                self.cache.set(E::CACHE_KEY, &items);
                self.install(items, extras);
            }
            Err(err) => {
                warn!(entity = E::KIND, error = %err, "load failed");
                self.state.update(|state| {
                    state.loading = false;
                    state.error = Some(err.to_string());
                });
            }
        }
    }

    fn install(&mut self, items: Vec<E>, extras: X) {
        self.state.update(|state| {
            state.items = items;
            state.extras = extras;
            state.loading = false;
        });
    }

    /// Replace the active filters wholesale.
    ///
    /// Returns `false`, publishing nothing, when `filters` equals the current
    /// criteria.
    pub fn set_filters(&mut self, filters: FilterOptions) -> bool {
        if self.state().filters == filters {
            return false;
        }
        self.state.update(|state| state.filters = filters);
        true
    }

    /// Items satisfying every active filter, in list order.
    pub fn filtered(&self) -> Vec<E> {
        self.state().filtered()
    }

    /// Look up an entity by identifier.
    pub fn get_by_id(&self, id: &EntityId) -> Option<E> {
        self.state().find(id).cloned()
    }

    /// Create an entity from `draft` with a fresh identifier and timestamps,
    /// append it, persist the list and publish.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdGenerationExhausted`] when
    /// [`MAX_ID_ATTEMPTS`] identifiers in a row collide with existing ones.
    pub fn add(&mut self, draft: E::Draft) -> Result<E, StoreError> {
        let id = self.fresh_id()?;
        let entity = E::from_draft(id, draft, self.clock.utc());
        let mut items = self.state().items.clone();
        items.push(entity.clone());
        self.cache.set(E::CACHE_KEY, &items);
        self.state.update(|state| state.items = items);
        debug!(entity = E::KIND, id = %entity.id(), "added");
        Ok(entity)
    }

    fn fresh_id(&self) -> Result<EntityId, StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if self.state().find(&candidate).is_none() {
                return Ok(candidate);
            }
            debug!(entity = E::KIND, id = %candidate, "generated id collided; retrying");
        }
        Err(StoreError::IdGenerationExhausted {
            entity: E::KIND,
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Merge `patch` into the entity with identifier `id`, refresh its update
    /// timestamp, persist and publish.
    ///
    /// Returns `None` without publishing when no entity has that identifier.
    pub fn update(&mut self, id: &EntityId, patch: E::Patch) -> Option<E> {
        let mut items = self.state().items.clone();
        let target = items.iter_mut().find(|item| item.id() == id)?;
        target.apply_patch(patch, self.clock.utc());
        let updated = target.clone();
        self.cache.set(E::CACHE_KEY, &items);
        self.state.update(|state| state.items = items);
        debug!(entity = E::KIND, id = %id, "updated");
        Some(updated)
    }

    /// Remove the entity with identifier `id`, along with any kind-specific
    /// references to it, persisting both.
    ///
    /// Returns `false` without publishing when no entity has that identifier.
    pub fn delete(&mut self, id: &EntityId) -> bool {
        let mut items = self.state().items.clone();
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return false;
        }
        let mut extras = self.state().extras.clone();
        if extras.forget(id) {
            extras.persist(&self.cache);
        }
        self.cache.set(E::CACHE_KEY, &items);
        self.state.update(|state| {
            state.items = items;
            state.extras = extras;
        });
        debug!(entity = E::KIND, id = %id, "deleted");
        true
    }

    /// Remove the persisted list (and kind-specific state) and empty the
    /// store. Filters, `loading` and `error` are kept.
    pub fn clear_cache(&mut self) {
        self.cache.remove(E::CACHE_KEY);
        X::discard(&self.cache);
        self.state.update(|state| {
            state.items.clear();
            state.extras = X::default();
        });
        info!(entity = E::KIND, "cache cleared");
    }

    /// Restore the initial state. The cache is left untouched.
    pub fn reset(&mut self) {
        self.state.publish(StoreState::default());
    }

    pub(crate) fn cache(&self) -> &NamespacedCache {
        &self.cache
    }

    pub(crate) fn update_extras(&mut self, change: impl FnOnce(&mut X)) {
        self.state.update(|state| change(&mut state.extras));
    }
}

/// Decode cached records one by one, skipping those that fail validation.
fn decode_records<E: Entity>(records: Vec<serde_json::Value>) -> Vec<E> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(entity) => Some(entity),
            Err(err) => {
                warn!(entity = E::KIND, index, error = %err, "skipping invalid cached record");
                None
            }
        })
        .collect()
}

impl<E: Entity, X: StoreExtras> std::fmt::Debug for EntityStore<E, X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStore")
            .field("entity", &E::KIND)
            .field("items", &self.state().items.len())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
