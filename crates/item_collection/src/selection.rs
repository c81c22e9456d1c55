//! Identifier-based selection state.

use std::{collections::HashSet, hash::Hash};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// How selecting an entry affects the rest of the selection in grouped collections.
pub enum SelectionScope {
    /// At most one entry is selected across the whole collection.
    Single,
    /// At most one entry is selected per group; ungrouped entries form their own group.
    SinglePerGroup,
    /// Any number of entries may be selected.
    #[default]
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Set of selected item identifiers.
///
/// Selection is keyed by id only and is never checked against the items of a collection, so it
/// survives filtering, sorting, and paging unchanged.
pub struct SelectionInfo<Id: Eq + Hash> {
    ids: HashSet<Id>,
}

impl<Id: Eq + Hash> Default for SelectionInfo<Id> {
    fn default() -> Self {
        Self {
            ids: HashSet::new(),
        }
    }
}

impl<Id: Eq + Hash> FromIterator<Id> for SelectionInfo<Id> {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<Id: Clone + Eq + Hash> SelectionInfo<Id> {
    /// Whether `id` is selected.
    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates selected ids in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &Id> + '_ {
        self.ids.iter()
    }

    /// Returns a selection with `id` added or removed.
    pub fn with(&self, id: Id, selected: bool) -> Self {
        let mut next = self.clone();
        if selected {
            next.ids.insert(id);
        } else {
            next.ids.remove(&id);
        }
        next
    }

    /// Returns a selection with the membership of `id` flipped.
    pub fn toggled(&self, id: Id) -> Self {
        let selected = !self.contains(&id);
        self.with(id, selected)
    }

    /// Returns a selection keeping only ids matching `keep`.
    pub fn retained(&self, mut keep: impl FnMut(&Id) -> bool) -> Self {
        self.ids.iter().filter(|id| keep(id)).cloned().collect()
    }
}
