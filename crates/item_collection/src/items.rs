//! Immutable paginated, filterable, sortable, selectable item collection.

use std::{collections::BTreeMap, fmt, hash::Hash, ops::RangeInclusive, sync::Arc};

use crate::{
    config::CollectionConfig,
    error::ItemsError,
    page::PageInfo,
    selection::SelectionInfo,
    sort::SortInfo,
};

/// Caller-supplied mapping from an item to its stable unique id.
pub type Identify<T, Id> = Arc<dyn Fn(&T) -> Id + Send + Sync>;

/// Named filter predicate.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Immutable item collection with filter, sort, page, and selection state.
///
/// Every operation takes `&self` and returns a new collection. Items and the derived visible
/// order are shared between collections, so transitions that only touch page or selection state
/// never copy items.
///
/// Visible items are the items passing every active filter, in sort order when a sort is active
/// and in insertion order otherwise. [`PageInfo::total`] always equals the visible item count.
pub struct Items<T, Id: Eq + Hash> {
    identify: Identify<T, Id>,
    all: Arc<Vec<T>>,
    visible: Arc<Vec<usize>>,
    filters: BTreeMap<String, Predicate<T>>,
    sort: Option<SortInfo<T>>,
    page: PageInfo,
    selection: SelectionInfo<Id>,
}

impl<T: 'static, Id: Clone + Eq + Hash> Items<T, Id> {
    /// Creates an empty collection with the default page size.
    pub fn new(identify: impl Fn(&T) -> Id + Send + Sync + 'static) -> Self {
        Self {
            identify: Arc::new(identify),
            all: Arc::new(Vec::new()),
            visible: Arc::new(Vec::new()),
            filters: BTreeMap::new(),
            sort: None,
            page: PageInfo::default(),
            selection: SelectionInfo::default(),
        }
    }

    /// Creates an empty collection with an explicit page size.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::InvalidPageSize`] when `page_size` is zero.
    pub fn with_page_size(
        identify: impl Fn(&T) -> Id + Send + Sync + 'static,
        page_size: usize,
    ) -> Result<Self, ItemsError> {
        Self::new(identify).set_page_size(page_size)
    }

    /// Creates an empty collection using the configured default page size.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::InvalidConfig`] when the config fails validation.
    pub fn with_config(
        identify: impl Fn(&T) -> Id + Send + Sync + 'static,
        config: &CollectionConfig,
    ) -> Result<Self, ItemsError> {
        config.validate()?;
        Self::with_page_size(identify, config.default_page_size)
    }

    /// Id of `item` according to the collection's identify function.
    pub fn identify(&self, item: &T) -> Id {
        (self.identify)(item)
    }

    /// All items in insertion order, ignoring filters and sort.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator + '_ {
        self.all.iter()
    }

    /// Items passing every filter, in sort order.
    pub fn visible(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator + '_ {
        self.visible.iter().map(|&index| &self.all[index])
    }

    /// Visible items on the current page.
    pub fn page_window(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator + '_ {
        self.visible[self.page.window()]
            .iter()
            .map(|&index| &self.all[index])
    }

    /// Current page metadata.
    pub fn page_info(&self) -> PageInfo {
        self.page
    }

    /// Number of pages, never less than one.
    pub fn pages(&self) -> usize {
        self.page.pages()
    }

    /// One-based inclusive display range of the current page; `1..=0` when empty.
    pub fn range(&self) -> RangeInclusive<usize> {
        self.page.range()
    }

    /// Whether the current page is the first one.
    pub fn first_page(&self) -> bool {
        self.page.first_page()
    }

    /// Whether the current page is the last one.
    pub fn last_page(&self) -> bool {
        self.page.last_page()
    }

    /// Active sort, if any.
    pub fn sort(&self) -> Option<&SortInfo<T>> {
        self.sort.as_ref()
    }

    /// Whether a filter named `name` is active.
    pub fn has_filter(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Names of the active filters in lexicographic order.
    pub fn filter_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.filters.keys().map(String::as_str)
    }

    /// Selected ids.
    pub fn selection(&self) -> &SelectionInfo<Id> {
        &self.selection
    }

    /// Whether `item` is selected.
    pub fn is_selected(&self, item: &T) -> bool {
        self.selection.contains(&self.identify(item))
    }

    /// Number of selected ids, including ids of items hidden by filters.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Selected items in insertion order, including items hidden by filters.
    pub fn selected_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.all().filter(|item| self.is_selected(item))
    }

    /// Selected items that are currently visible, in visible order.
    pub fn visible_selected_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible().filter(|item| self.is_selected(item))
    }

    /// Whether there is at least one visible item and every visible item is selected.
    pub fn all_visible_selected(&self) -> bool {
        !self.visible.is_empty() && self.visible().all(|item| self.is_selected(item))
    }

    /// Replaces all items and returns to the first page.
    pub fn add_all(&self, items: impl IntoIterator<Item = T>) -> Self {
        Self {
            all: Arc::new(items.into_iter().collect()),
            page: self.page.goto_first(),
            ..self.clone()
        }
        .refreshed()
    }

    /// Removes all items and clears the selection. Filters, sort, and page size are kept.
    pub fn clear(&self) -> Self {
        Self {
            all: Arc::new(Vec::new()),
            page: self.page.goto_first(),
            selection: SelectionInfo::default(),
            ..self.clone()
        }
        .refreshed()
    }

    /// Adds a filter, replacing any filter with the same name.
    pub fn add_filter(
        &self,
        name: impl Into<String>,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.add_filter_predicate(name, Arc::new(predicate))
    }

    /// Adds an already shared [`Predicate`], replacing any filter with the same name.
    pub fn add_filter_predicate(&self, name: impl Into<String>, predicate: Predicate<T>) -> Self {
        let mut next = self.clone();
        next.filters.insert(name.into(), predicate);
        next.refreshed()
    }

    /// Removes the filter named `name`; unknown names are ignored.
    pub fn remove_filter(&self, name: &str) -> Self {
        if !self.has_filter(name) {
            return self.clone();
        }
        let mut next = self.clone();
        next.filters.remove(name);
        next.refreshed()
    }

    /// Removes every filter.
    pub fn clear_filters(&self) -> Self {
        if self.filters.is_empty() {
            return self.clone();
        }
        Self {
            filters: BTreeMap::new(),
            ..self.clone()
        }
        .refreshed()
    }

    /// Sets the active sort. This always applies `sort` as given and never toggles.
    pub fn sort_by(&self, sort: SortInfo<T>) -> Self {
        Self {
            sort: Some(sort),
            ..self.clone()
        }
        .refreshed()
    }

    /// Flips the direction of the active sort; without a sort this is a no-op.
    pub fn toggle_sort(&self) -> Self {
        match &self.sort {
            Some(sort) => self.sort_by(sort.toggle()),
            None => self.clone(),
        }
    }

    /// Drops the active sort, restoring insertion order.
    pub fn clear_sort(&self) -> Self {
        Self {
            sort: None,
            ..self.clone()
        }
        .refreshed()
    }

    /// Moves to `page_index`, clamped to the last page.
    pub fn goto_page(&self, page_index: usize) -> Self {
        self.with_page(self.page.goto(page_index))
    }

    /// Moves to the first page.
    pub fn goto_first_page(&self) -> Self {
        self.with_page(self.page.goto_first())
    }

    /// Moves to the last page.
    pub fn goto_last_page(&self) -> Self {
        self.with_page(self.page.goto_last())
    }

    /// Moves one page forward, clamped to the last page.
    pub fn next_page(&self) -> Self {
        self.with_page(self.page.next_page())
    }

    /// Moves one page back, clamped to the first page.
    pub fn previous_page(&self) -> Self {
        self.with_page(self.page.previous_page())
    }

    /// Changes the page size, keeping the page index inside the new page count.
    ///
    /// # Errors
    ///
    /// Returns [`ItemsError::InvalidPageSize`] when `page_size` is zero.
    pub fn set_page_size(&self, page_size: usize) -> Result<Self, ItemsError> {
        Ok(self.with_page(self.page.with_page_size(page_size)?))
    }

    /// Adds or removes `item` from the selection. The item does not need to be in the collection.
    pub fn select(&self, item: &T, selected: bool) -> Self {
        self.with_selection(self.selection.with(self.identify(item), selected))
    }

    /// Flips the selection state of `item`.
    pub fn toggle_selection(&self, item: &T) -> Self {
        self.with_selection(self.selection.toggled(self.identify(item)))
    }

    /// Clears the selection.
    pub fn select_none(&self) -> Self {
        self.with_selection(SelectionInfo::default())
    }

    /// Replaces the selection with the visible items.
    pub fn select_visible(&self) -> Self {
        self.with_selection(self.visible().map(|item| self.identify(item)).collect())
    }

    /// Replaces the selection with the items on the current page.
    pub fn select_page(&self) -> Self {
        self.with_selection(self.page_window().map(|item| self.identify(item)).collect())
    }

    /// Replaces the selection with every item, including items hidden by filters.
    pub fn select_all(&self) -> Self {
        self.with_selection(self.all().map(|item| self.identify(item)).collect())
    }

    fn with_page(&self, page: PageInfo) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    fn with_selection(&self, selection: SelectionInfo<Id>) -> Self {
        Self {
            selection,
            ..self.clone()
        }
    }

    fn refreshed(mut self) -> Self {
        let all = &self.all;
        let mut visible: Vec<usize> = (0..all.len())
            .filter(|&index| self.filters.values().all(|keep| keep(&all[index])))
            .collect();
        if let Some(sort) = &self.sort {
            visible.sort_by(|&a, &b| sort.compare(&all[a], &all[b]));
        }
        self.page = self.page.with_total(visible.len());
        self.visible = Arc::new(visible);
        self
    }
}

impl<T, Id: Clone + Eq + Hash> Clone for Items<T, Id> {
    fn clone(&self) -> Self {
        Self {
            identify: Arc::clone(&self.identify),
            all: Arc::clone(&self.all),
            visible: Arc::clone(&self.visible),
            filters: self.filters.clone(),
            sort: self.sort.clone(),
            page: self.page,
            selection: self.selection.clone(),
        }
    }
}

impl<T, Id: fmt::Debug + Eq + Hash> fmt::Debug for Items<T, Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Items")
            .field("len", &self.all.len())
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("sort", &self.sort)
            .field("page", &self.page)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
