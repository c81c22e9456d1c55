//! Grouped entry collections for menu-like lists (items, titled groups, and separators).

use std::{collections::BTreeMap, hash::Hash, sync::Arc};

use crate::{
    items::{Identify, Predicate},
    selection::{SelectionInfo, SelectionScope},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Titled group of items.
pub struct Group<T, G> {
    /// Group identifier used for per-group selection.
    pub id: G,
    /// Optional group heading.
    pub text: Option<String>,
    /// Items of the group in display order.
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One top-level entry of an [`Entries`] collection.
pub enum Entry<T, G> {
    /// Ungrouped item.
    Item(T),
    /// Group of items.
    Group(Group<T, G>),
    /// Visual divider between entries.
    Separator,
}

/// Immutable grouped collection with filter and scoped selection state.
///
/// Filters apply to items only. Groups left without items are dropped from
/// [`Entries::entries`], and separators are kept only between two remaining non-separator
/// entries.
pub struct Entries<T, Id: Eq + Hash, G> {
    identify: Identify<T, Id>,
    scope: SelectionScope,
    all: Arc<Vec<Entry<T, G>>>,
    filters: BTreeMap<String, Predicate<T>>,
    selection: SelectionInfo<Id>,
}

impl<T, Id, G> Entries<T, Id, G>
where
    T: Clone + 'static,
    Id: Clone + Eq + Hash,
    G: Clone + PartialEq,
{
    /// Creates an empty collection with the given selection scope.
    pub fn new(
        identify: impl Fn(&T) -> Id + Send + Sync + 'static,
        scope: SelectionScope,
    ) -> Self {
        Self {
            identify: Arc::new(identify),
            scope,
            all: Arc::new(Vec::new()),
            filters: BTreeMap::new(),
            selection: SelectionInfo::default(),
        }
    }

    /// Selection scope of the collection.
    pub fn scope(&self) -> SelectionScope {
        self.scope
    }

    /// Replaces all entries. The selection is kept.
    pub fn add_all(&self, entries: impl IntoIterator<Item = Entry<T, G>>) -> Self {
        Self {
            all: Arc::new(entries.into_iter().collect()),
            ..self.clone()
        }
    }

    /// Removes all entries and clears the selection.
    pub fn clear(&self) -> Self {
        Self {
            all: Arc::new(Vec::new()),
            selection: SelectionInfo::default(),
            ..self.clone()
        }
    }

    /// Adds an item filter, replacing any filter with the same name.
    pub fn add_filter(
        &self,
        name: impl Into<String>,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        let mut next = self.clone();
        next.filters.insert(name.into(), Arc::new(predicate));
        next
    }

    /// Removes the filter named `name`; unknown names are ignored.
    pub fn remove_filter(&self, name: &str) -> Self {
        let mut next = self.clone();
        next.filters.remove(name);
        next
    }

    /// Removes every filter.
    pub fn clear_filters(&self) -> Self {
        Self {
            filters: BTreeMap::new(),
            ..self.clone()
        }
    }

    /// Entries left after filtering, with empty groups and dangling separators removed.
    pub fn entries(&self) -> Vec<Entry<T, G>> {
        let mut out: Vec<Entry<T, G>> = Vec::with_capacity(self.all.len());
        for entry in self.all.iter() {
            match entry {
                Entry::Item(item) => {
                    if self.passes(item) {
                        out.push(Entry::Item(item.clone()));
                    }
                }
                Entry::Group(group) => {
                    let items: Vec<T> = group
                        .items
                        .iter()
                        .filter(|item| self.passes(item))
                        .cloned()
                        .collect();
                    if !items.is_empty() {
                        out.push(Entry::Group(Group {
                            id: group.id.clone(),
                            text: group.text.clone(),
                            items,
                        }));
                    }
                }
                Entry::Separator => {
                    if matches!(out.last(), Some(last) if !matches!(last, Entry::Separator)) {
                        out.push(Entry::Separator);
                    }
                }
            }
        }
        if matches!(out.last(), Some(Entry::Separator)) {
            out.pop();
        }
        out
    }

    /// Visible items in display order, flattened across groups.
    pub fn items(&self) -> Vec<T> {
        self.grouped_items()
            .filter(|(_, item)| self.passes(item))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Selected ids.
    pub fn selection(&self) -> &SelectionInfo<Id> {
        &self.selection
    }

    /// Whether `item` is selected.
    pub fn is_selected(&self, item: &T) -> bool {
        self.selection.contains(&(self.identify)(item))
    }

    /// Selected items in display order, including items hidden by filters.
    pub fn selected_items(&self) -> Vec<T> {
        self.grouped_items()
            .filter(|(_, item)| self.is_selected(item))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Adds or removes `item` from the selection, honoring the selection scope.
    ///
    /// Under [`SelectionScope::SinglePerGroup`], ids that match no entry form their own bucket:
    /// selecting one evicts nothing, and selecting a known item never evicts them.
    pub fn select(&self, item: &T, selected: bool) -> Self {
        let id = (self.identify)(item);
        if !selected {
            return self.with_selection(self.selection.with(id, false));
        }
        let kept = match self.scope {
            SelectionScope::Multiple => self.selection.clone(),
            SelectionScope::Single => SelectionInfo::default(),
            SelectionScope::SinglePerGroup => match self.group_of(&id) {
                Some(group) => self
                    .selection
                    .retained(|selected_id| self.group_of(selected_id).as_ref() != Some(&group)),
                None => self.selection.clone(),
            },
        };
        self.with_selection(kept.with(id, true))
    }

    /// Flips the selection state of `item`, honoring the selection scope.
    pub fn toggle_selection(&self, item: &T) -> Self {
        let selected = !self.is_selected(item);
        self.select(item, selected)
    }

    /// Clears the selection.
    pub fn select_none(&self) -> Self {
        self.with_selection(SelectionInfo::default())
    }

    fn with_selection(&self, selection: SelectionInfo<Id>) -> Self {
        Self {
            selection,
            ..self.clone()
        }
    }

    fn passes(&self, item: &T) -> bool {
        self.filters.values().all(|keep| keep(item))
    }

    fn grouped_items(&self) -> impl Iterator<Item = (Option<&G>, &T)> + '_ {
        let mut flattened = Vec::new();
        for entry in self.all.iter() {
            match entry {
                Entry::Item(item) => flattened.push((None, item)),
                Entry::Group(group) => {
                    flattened.extend(group.items.iter().map(|item| (Some(&group.id), item)))
                }
                Entry::Separator => {}
            }
        }
        flattened.into_iter()
    }

    /// Group of the first item with `id`: `Some(None)` for ungrouped items, `None` when no
    /// item has `id`.
    fn group_of(&self, id: &Id) -> Option<Option<G>> {
        self.grouped_items()
            .find(|(_, item)| (self.identify)(*item) == *id)
            .map(|(group, _)| group.cloned())
    }
}

impl<T, Id: Clone + Eq + Hash, G> Clone for Entries<T, Id, G> {
    fn clone(&self) -> Self {
        Self {
            identify: Arc::clone(&self.identify),
            scope: self.scope,
            all: Arc::clone(&self.all),
            filters: self.filters.clone(),
            selection: self.selection.clone(),
        }
    }
}
