//! Copy-on-write membership sets for favorites and saved listings.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

/// Set of ids with value semantics.
///
/// Every mutating helper returns a new set and leaves the receiver as it
/// was. Clones share storage until one of them changes.
#[derive(Debug, Clone)]
pub struct ToggleSet<Id> {
    members: Arc<HashSet<Id>>,
}

impl<Id> ToggleSet<Id>
where
    Id: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            members: Arc::new(HashSet::new()),
        }
    }

    fn edited(&self, edit: impl FnOnce(&mut HashSet<Id>)) -> Self {
        let mut members = (*self.members).clone();
        edit(&mut members);
        Self {
            members: Arc::new(members),
        }
    }

    /// New set with `id` added if absent, removed if present
    pub fn toggle(&self, id: &Id) -> Self {
        self.edited(|members| {
            if !members.remove(id) {
                members.insert(id.clone());
            }
        })
    }

    pub fn with(&self, id: Id) -> Self {
        if self.contains(&id) {
            return self.clone();
        }
        self.edited(|members| {
            members.insert(id);
        })
    }

    pub fn without(&self, id: &Id) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        self.edited(|members| {
            members.remove(id);
        })
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.members.iter()
    }
}

impl<Id: Clone + Eq + Hash> Default for ToggleSet<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: Eq + Hash> PartialEq for ToggleSet<Id> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.members, &other.members) || self.members == other.members
    }
}

impl<Id: Eq + Hash> Eq for ToggleSet<Id> {}

impl<Id: Eq + Hash> FromIterator<Id> for ToggleSet<Id> {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        Self {
            members: Arc::new(iter.into_iter().collect()),
        }
    }
}

// Serialized as a plain list of ids
impl<Id: Serialize> Serialize for ToggleSet<Id> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.members.iter())
    }
}

impl<'de, Id> Deserialize<'de> for ToggleSet<Id>
where
    Id: Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ids = Vec::<Id>::deserialize(deserializer)?;
        Ok(ids.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_model::{ProductId, PropertyId};

    #[test]
    fn toggle_flips_membership_without_touching_receiver() {
        let empty = ToggleSet::new();
        let one = empty.toggle(&ProductId::new(3));
        assert!(one.contains(&ProductId::new(3)));
        assert!(!empty.contains(&ProductId::new(3)));

        let back = one.toggle(&ProductId::new(3));
        assert_eq!(back, empty);
        assert!(one.contains(&ProductId::new(3)));
    }

    #[test]
    fn with_and_without_are_idempotent() {
        let id = PropertyId::from_static("2");
        let set = ToggleSet::new().with(id.clone()).with(id.clone());
        assert_eq!(set.len(), 1);
        let removed = set.without(&id).without(&id);
        assert!(removed.is_empty());
    }

    #[test]
    fn collects_and_serializes_as_list() {
        let set: ToggleSet<u32> = [1, 1, 2].into_iter().collect();
        assert_eq!(set.len(), 2);
        let json = serde_json::to_string(&set.without(&2)).unwrap();
        assert_eq!(json, "[1]");
        let parsed: ToggleSet<u32> = serde_json::from_str("[2,1]").unwrap();
        assert_eq!(parsed, set);
    }
}
