//! Shortlist operations of the candidate store.

use tracing::debug;

use super::{CandidateStore, StoreExtras};
use crate::domain::candidate::Candidate;
use crate::domain::entity::Entity;
use crate::domain::entity_id::EntityId;

impl CandidateStore {
    /// Flip shortlist membership of `id`, persist the shortlist and publish.
    ///
    /// Returns the new membership. Identifiers are not checked against the
    /// candidate list.
    pub fn toggle_shortlist(&mut self, id: &EntityId) -> bool {
        let mut shortlist = self.state().extras.clone();
        let member = shortlist.toggle(id);
        shortlist.persist(self.cache());
        self.update_extras(|extras| *extras = shortlist);
        debug!(id = %id, member, "toggled shortlist membership");
        member
    }

    /// Returns `true` when `id` is shortlisted.
    pub fn is_in_shortlist(&self, id: &EntityId) -> bool {
        self.state().extras.contains(id)
    }

    /// Shortlisted candidates in list order. Dangling identifiers are skipped.
    pub fn shortlisted(&self) -> Vec<Candidate> {
        let state = self.state();
        state
            .items
            .iter()
            .filter(|candidate| state.extras.contains(candidate.id()))
            .cloned()
            .collect()
    }
}
