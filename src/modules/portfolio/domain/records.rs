use serde::{Deserialize, Serialize};

use crate::portfolio::domain::entities::RecordId;
use crate::portfolio::domain::identifier::generate_record_id;

/// A record living in one of the ordered portfolio collections.
pub trait Record: Clone {
    /// Record content without an identifier, as submitted by a form.
    type Draft;
    /// Partial record; unset fields keep their current value.
    type Patch;

    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
    fn id(&self) -> &RecordId;
    fn apply(&mut self, patch: Self::Patch);
}

/// Insertion-ordered collection of records keyed by their immutable id.
///
/// Serialized as a bare JSON array so the durable layout stays a plain list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct RecordList<T> {
    items: Vec<T>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for RecordList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Record> RecordList<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id().as_str() == id)
    }

    fn contains_id(&self, id: &RecordId) -> bool {
        self.items.iter().any(|r| r.id() == id)
    }

    /// Appends a new record built from `draft` under a freshly generated id.
    pub fn insert(&mut self, draft: T::Draft) -> &T {
        let mut id = generate_record_id();
        while self.contains_id(&id) {
            id = generate_record_id();
        }

        self.items.push(T::from_draft(id, draft));
        // just pushed
        &self.items[self.items.len() - 1]
    }

    /// Merges `patch` into the record with `id`. Returns false when absent.
    pub fn update(&mut self, id: &str, patch: T::Patch) -> bool {
        match self.items.iter_mut().find(|r| r.id().as_str() == id) {
            Some(record) => {
                record.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Removes the record with `id`, keeping the relative order of the rest.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id().as_str() != id);
        self.items.len() != before
    }

    /// Replaces the whole sequence. The caller owns the permutation check.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::domain::entities::{Experience, ExperienceDraft, ExperiencePatch};

    fn experience(id: &str, role: &str) -> Experience {
        Experience {
            id: RecordId::from(id),
            role: role.to_string(),
            company: "Acme".to_string(),
            period: "2020".to_string(),
            description: vec![],
        }
    }

    fn three() -> RecordList<Experience> {
        RecordList::from(vec![
            experience("e1", "One"),
            experience("e2", "Two"),
            experience("e3", "Three"),
        ])
    }

    #[test]
    fn test_insert_appends_with_fresh_id() {
        let mut list = three();
        let inserted = list
            .insert(ExperienceDraft {
                role: "Four".to_string(),
                ..Default::default()
            })
            .clone();

        assert_eq!(list.len(), 4);
        assert!(!inserted.id.as_str().is_empty());
        assert_eq!(list.as_slice().last(), Some(&inserted));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = three();

        assert!(list.remove("e2"));

        let ids: Vec<&str> = list.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e3"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = three();

        assert!(!list.remove("missing"));
        assert_eq!(list, three());
    }

    #[test]
    fn test_update_touches_only_matching_record() {
        let mut list = three();

        let found = list.update(
            "e3",
            ExperiencePatch {
                role: Some("Lead".to_string()),
                ..Default::default()
            },
        );

        assert!(found);
        assert_eq!(list.get("e3").unwrap().role, "Lead");
        assert_eq!(list.get("e1").unwrap().role, "One");
        assert_eq!(list.get("e2").unwrap().role, "Two");
    }

    #[test]
    fn test_update_unknown_id_returns_false() {
        let mut list = three();

        assert!(!list.update("nope", ExperiencePatch::default()));
        assert_eq!(list, three());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_value(three()).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 3);
    }
}
