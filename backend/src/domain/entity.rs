//! Behaviour shared by every entity kind held in an [`EntityStore`].
//!
//! [`EntityStore`]: crate::domain::EntityStore

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::entity_id::EntityId;
use super::filter::Filterable;

/// An identifiable, timestamped record that a store can create and patch.
pub trait Entity:
    Filterable + Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Entity contents without identifier or timestamps.
    type Draft;

    /// Optional field replacements applied by `update`.
    type Patch;

    /// Singular label used in logs and errors.
    const KIND: &'static str;

    /// Cache key (before namespacing) under which the list is persisted.
    const CACHE_KEY: &'static str;

    /// Identifier of this entity.
    fn id(&self) -> &EntityId;

    /// Build a new entity, stamping both timestamps with `now`.
    fn from_draft(id: EntityId, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Merge `patch` into this entity and refresh its update timestamp.
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}
