//! Domain primitives, filter engine and entity stores.
//!
//! Purpose: model jobs, candidates and the shortlist, evaluate filter
//! criteria, and hold each entity list in an observable store that persists
//! through a namespaced cache. Adapters for the key-value medium and the
//! dataset live behind the traits in [`ports`].
//!
//! Public surface:
//! - [`JobStore`] / [`CandidateStore`]: instantiations of [`EntityStore`].
//! - [`FilterOptions`]: criteria shared by both stores.
//! - [`NamespacedCache`]: never-failing JSON cache over a key-value store.
//! - [`ExampleDataset`]: generated fallback data.

pub mod ports;

mod cache;
mod candidate;
mod entity;
mod entity_id;
mod error;
mod example_data;
mod filter;
mod job;
mod observable;
mod shortlist;
mod store;

pub use self::cache::{DEFAULT_KEY_PREFIX, NamespacedCache};
pub use self::candidate::{
    Candidate, CandidateDraft, CandidatePatch, CandidateStage, CandidateValidationError,
    MAX_RATING, Rating,
};
pub use self::entity::Entity;
#[cfg(test)]
pub use self::entity_id::MockIdGenerator;
pub use self::entity_id::{
    EntityId, EntityIdValidationError, GENERATED_ID_LENGTH, IdGenerator, RandomIdGenerator,
    SeededIdGenerator,
};
pub use self::error::{StoreError, UnknownValueError};
pub use self::example_data::ExampleDataset;
pub use self::filter::{FilterOptions, Filterable, RangeFilter};
pub use self::job::{Job, JobDraft, JobGrade, JobPatch, JobStatus, JobValidationError, SalaryRange};
pub use self::observable::{Observable, SubscriptionId};
pub use self::shortlist::Shortlist;
pub use self::store::{
    CandidateStore, EntityStore, JobStore, MAX_ID_ATTEMPTS, StoreExtras, StoreState,
};
