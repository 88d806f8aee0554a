//! Candidates flagged for attention.

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// Insertion-ordered set of candidate identifiers.
///
/// Persisted as a JSON array. Duplicates in stored data are dropped on load,
/// keeping the first occurrence.
///
/// # Examples
/// ```
/// use hr_panel::domain::{EntityId, Shortlist};
///
/// let id = EntityId::new("c1").expect("valid id");
/// let mut shortlist = Shortlist::default();
/// assert!(shortlist.toggle(&id));
/// assert!(shortlist.contains(&id));
/// assert!(!shortlist.toggle(&id));
/// assert!(shortlist.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<EntityId>", into = "Vec<EntityId>")]
pub struct Shortlist {
    ids: Vec<EntityId>,
}

impl Shortlist {
    /// Flip membership of `id`, returning the new membership.
    pub fn toggle(&mut self, id: &EntityId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    /// Returns `true` when `id` is on the shortlist.
    pub fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    /// Drop `id`, returning whether it was present.
    pub fn remove(&mut self, id: &EntityId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Number of shortlisted identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when nothing is shortlisted.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<EntityId>> for Shortlist {
    fn from(raw: Vec<EntityId>) -> Self {
        let mut ids: Vec<EntityId> = Vec::with_capacity(raw.len());
        for id in raw {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }
}

impl From<Shortlist> for Vec<EntityId> {
    fn from(shortlist: Shortlist) -> Self {
        shortlist.ids
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::test_support::entity_id;

    #[rstest]
    fn toggle_twice_restores_membership() {
        let mut shortlist = Shortlist::from(vec![entity_id("a")]);
        let original = shortlist.clone();
        let id = entity_id("b");

        assert!(shortlist.toggle(&id));
        assert!(!shortlist.toggle(&id));
        assert_eq!(shortlist, original);
    }

    #[rstest]
    fn preserves_insertion_order() {
        let mut shortlist = Shortlist::default();
        for raw in ["c", "a", "b"] {
            shortlist.toggle(&entity_id(raw));
        }
        let encoded = serde_json::to_value(&shortlist).expect("serialize");
        assert_eq!(encoded, json!(["c", "a", "b"]));
    }

    #[rstest]
    fn deserialising_drops_duplicates() {
        let shortlist: Shortlist =
            serde_json::from_value(json!(["x", "y", "x"])).expect("deserialize");
        assert_eq!(shortlist.len(), 2);
        assert_eq!(
            serde_json::to_value(&shortlist).expect("serialize"),
            json!(["x", "y"])
        );
    }

    #[rstest]
    fn removing_absent_id_reports_false() {
        let mut shortlist = Shortlist::default();
        assert!(!shortlist.remove(&entity_id("ghost")));
    }
}
