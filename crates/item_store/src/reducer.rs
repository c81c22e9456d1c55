//! Reducer actions and transition logic for item stores.

use std::{fmt, hash::Hash};

use item_collection::{Items, ItemsError, Predicate, SortInfo};

/// Actions accepted by [`reduce_items`], one per user intent a list control bar can raise.
pub enum ItemsAction<T> {
    /// Replace every item and return to the first page.
    AddAll(Vec<T>),
    /// Remove every item and clear the selection.
    Clear,
    /// Add or replace a named filter.
    AddFilter {
        /// Filter name.
        name: String,
        /// Items failing the predicate are hidden.
        predicate: Predicate<T>,
    },
    /// Remove a named filter if present.
    RemoveFilter {
        /// Filter name.
        name: String,
    },
    /// Remove every filter.
    ClearFilters,
    /// Set the active sort.
    SortBy(SortInfo<T>),
    /// Flip the direction of the active sort.
    ToggleSort,
    /// Restore insertion order.
    ClearSort,
    /// Move to a page, clamped into range.
    GotoPage(usize),
    /// Move to the first page.
    GotoFirstPage,
    /// Move to the last page.
    GotoLastPage,
    /// Move one page forward.
    NextPage,
    /// Move one page back.
    PreviousPage,
    /// Change the page size.
    SetPageSize(usize),
    /// Select or deselect one item.
    Select {
        /// Item whose id is added or removed.
        item: T,
        /// Whether the item becomes selected.
        selected: bool,
    },
    /// Flip the selection state of one item.
    ToggleSelection(T),
    /// Clear the selection.
    SelectNone,
    /// Select exactly the visible items.
    SelectVisible,
    /// Select exactly the items on the current page.
    SelectPage,
    /// Select every item.
    SelectAll,
}

impl<T> ItemsAction<T> {
    /// Builds an [`ItemsAction::AddFilter`] from a closure.
    pub fn add_filter(
        name: impl Into<String>,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::AddFilter {
            name: name.into(),
            predicate: std::sync::Arc::new(predicate),
        }
    }

    /// Builds an [`ItemsAction::RemoveFilter`].
    pub fn remove_filter(name: impl Into<String>) -> Self {
        Self::RemoveFilter { name: name.into() }
    }
}

impl<T: fmt::Debug> fmt::Debug for ItemsAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddAll(items) => f.debug_tuple("AddAll").field(&items.len()).finish(),
            Self::Clear => f.write_str("Clear"),
            Self::AddFilter { name, .. } => f
                .debug_struct("AddFilter")
                .field("name", name)
                .finish_non_exhaustive(),
            Self::RemoveFilter { name } => {
                f.debug_struct("RemoveFilter").field("name", name).finish()
            }
            Self::ClearFilters => f.write_str("ClearFilters"),
            Self::SortBy(sort) => f.debug_tuple("SortBy").field(sort).finish(),
            Self::ToggleSort => f.write_str("ToggleSort"),
            Self::ClearSort => f.write_str("ClearSort"),
            Self::GotoPage(index) => f.debug_tuple("GotoPage").field(index).finish(),
            Self::GotoFirstPage => f.write_str("GotoFirstPage"),
            Self::GotoLastPage => f.write_str("GotoLastPage"),
            Self::NextPage => f.write_str("NextPage"),
            Self::PreviousPage => f.write_str("PreviousPage"),
            Self::SetPageSize(size) => f.debug_tuple("SetPageSize").field(size).finish(),
            Self::Select { item, selected } => f
                .debug_struct("Select")
                .field("item", item)
                .field("selected", selected)
                .finish(),
            Self::ToggleSelection(item) => f.debug_tuple("ToggleSelection").field(item).finish(),
            Self::SelectNone => f.write_str("SelectNone"),
            Self::SelectVisible => f.write_str("SelectVisible"),
            Self::SelectPage => f.write_str("SelectPage"),
            Self::SelectAll => f.write_str("SelectAll"),
        }
    }
}

/// Applies an [`ItemsAction`] to a collection and returns the next collection.
///
/// This is the only transition path used by [`crate::ItemStore`]; `items` itself is never
/// modified.
///
/// # Errors
///
/// Returns [`ItemsError::InvalidPageSize`] for [`ItemsAction::SetPageSize`] with a zero size.
pub fn reduce_items<T, Id>(
    items: &Items<T, Id>,
    action: ItemsAction<T>,
) -> Result<Items<T, Id>, ItemsError>
where
    T: 'static,
    Id: Clone + Eq + Hash,
{
    let next = match action {
        ItemsAction::AddAll(values) => items.add_all(values),
        ItemsAction::Clear => items.clear(),
        ItemsAction::AddFilter { name, predicate } => items.add_filter_predicate(name, predicate),
        ItemsAction::RemoveFilter { name } => items.remove_filter(&name),
        ItemsAction::ClearFilters => items.clear_filters(),
        ItemsAction::SortBy(sort) => items.sort_by(sort),
        ItemsAction::ToggleSort => items.toggle_sort(),
        ItemsAction::ClearSort => items.clear_sort(),
        ItemsAction::GotoPage(index) => items.goto_page(index),
        ItemsAction::GotoFirstPage => items.goto_first_page(),
        ItemsAction::GotoLastPage => items.goto_last_page(),
        ItemsAction::NextPage => items.next_page(),
        ItemsAction::PreviousPage => items.previous_page(),
        ItemsAction::SetPageSize(size) => items.set_page_size(size)?,
        ItemsAction::Select { item, selected } => items.select(&item, selected),
        ItemsAction::ToggleSelection(item) => items.toggle_selection(&item),
        ItemsAction::SelectNone => items.select_none(),
        ItemsAction::SelectVisible => items.select_visible(),
        ItemsAction::SelectPage => items.select_page(),
        ItemsAction::SelectAll => items.select_all(),
    };
    Ok(next)
}
