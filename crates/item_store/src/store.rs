//! Reactive store wrapping an [`Items`] collection for list, table, and card-view components.

use std::{hash::Hash, ops::RangeInclusive};

use item_collection::{CollectionConfig, Items, ItemsError, PageInfo};
use leptos::*;

use crate::reducer::{reduce_items, ItemsAction};

/// Leptos handle for reading an item collection and dispatching [`ItemsAction`] values.
///
/// Mutations run one at a time through `dispatch`; each successful transition publishes a new
/// [`Items`] value, so subscribers never observe a partially updated collection.
pub struct ItemStore<T: 'static, Id: Eq + Hash + 'static> {
    /// Reactive collection signal.
    pub items: RwSignal<Items<T, Id>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ItemsAction<T>>,
}

impl<T: 'static, Id: Eq + Hash + 'static> Clone for ItemStore<T, Id> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, Id: Eq + Hash + 'static> Copy for ItemStore<T, Id> {}

impl<T, Id> ItemStore<T, Id>
where
    T: Clone + 'static,
    Id: Clone + Eq + Hash + 'static,
{
    /// Dispatches a reducer action through the store callback.
    pub fn dispatch_action(&self, action: ItemsAction<T>) {
        self.dispatch.call(action);
    }

    /// Items of the current page.
    pub fn page_window(&self) -> Signal<Vec<T>> {
        let items = self.items;
        Signal::derive(move || items.with(|items| items.page_window().cloned().collect()))
    }

    /// Filtered and sorted items, for consumers that do not paginate.
    pub fn visible(&self) -> Signal<Vec<T>> {
        let items = self.items;
        Signal::derive(move || items.with(|items| items.visible().cloned().collect()))
    }

    /// Selected items, including items hidden by filters.
    pub fn selected_items(&self) -> Signal<Vec<T>> {
        let items = self.items;
        Signal::derive(move || items.with(|items| items.selected_items().cloned().collect()))
    }

    /// Current page metadata.
    pub fn page_info(&self) -> Signal<PageInfo> {
        let items = self.items;
        Signal::derive(move || items.with(Items::page_info))
    }

    /// One-based display range of the current page.
    pub fn range(&self) -> Signal<RangeInclusive<usize>> {
        let page_info = self.page_info();
        Signal::derive(move || page_info.get().range())
    }

    /// Number of pages.
    pub fn pages(&self) -> Signal<usize> {
        let page_info = self.page_info();
        Signal::derive(move || page_info.get().pages())
    }

    /// Whether the first page is shown, for disabling "previous" controls.
    pub fn first_page(&self) -> Signal<bool> {
        let page_info = self.page_info();
        Signal::derive(move || page_info.get().first_page())
    }

    /// Whether the last page is shown, for disabling "next" controls.
    pub fn last_page(&self) -> Signal<bool> {
        let page_info = self.page_info();
        Signal::derive(move || page_info.get().last_page())
    }

    /// Whether `item` is selected, for checkbox and highlight rendering.
    pub fn is_selected(&self, item: T) -> Signal<bool> {
        let items = self.items;
        Signal::derive(move || items.with(|items| items.is_selected(&item)))
    }
}

/// Creates an item store with an empty collection configured from `config`.
///
/// # Errors
///
/// Returns [`ItemsError::InvalidConfig`] when `config` fails validation.
pub fn create_item_store<T, Id>(
    identify: impl Fn(&T) -> Id + Send + Sync + 'static,
    config: &CollectionConfig,
) -> Result<ItemStore<T, Id>, ItemsError>
where
    T: 'static,
    Id: Clone + Eq + Hash + 'static,
{
    let items = create_rw_signal(Items::with_config(identify, config)?);

    let dispatch = Callback::new(move |action: ItemsAction<T>| {
        match items.with_untracked(|current| reduce_items(current, action)) {
            Ok(next) => items.set(next),
            Err(err) => logging::warn!("item store reducer error: {err}"),
        }
    });

    Ok(ItemStore { items, dispatch })
}

/// Provides `store` to descendant components.
pub fn provide_item_store<T, Id>(store: ItemStore<T, Id>)
where
    T: 'static,
    Id: Eq + Hash + 'static,
{
    provide_context(store);
}

/// Returns the [`ItemStore`] provided for this item and id type.
///
/// # Panics
///
/// Panics if called outside a component tree where [`provide_item_store`] ran for `T` and `Id`.
pub fn use_item_store<T, Id>() -> ItemStore<T, Id>
where
    T: 'static,
    Id: Eq + Hash + 'static,
{
    use_context::<ItemStore<T, Id>>().expect("ItemStore not provided")
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dispatch_publishes_new_collection() {
        let runtime = create_runtime();
        let store = create_item_store(|n: &u32| *n, &CollectionConfig::default()).expect("store");

        store.dispatch_action(ItemsAction::AddAll((1..=100).collect()));
        store.dispatch_action(ItemsAction::SetPageSize(10));
        store.dispatch_action(ItemsAction::GotoPage(3));

        assert_eq!(store.range().get_untracked(), 31..=40);
        assert_eq!(store.pages().get_untracked(), 10);
        assert_eq!(
            store.page_window().get_untracked(),
            (31..=40).collect::<Vec<_>>()
        );
        assert!(!store.first_page().get_untracked());
        assert!(!store.last_page().get_untracked());

        runtime.dispose();
    }

    #[test]
    fn rejected_action_keeps_previous_collection() {
        let runtime = create_runtime();
        let store = create_item_store(|n: &u32| *n, &CollectionConfig::default()).expect("store");

        store.dispatch_action(ItemsAction::AddAll((1..=10).collect()));
        store.dispatch_action(ItemsAction::SetPageSize(0));

        let info = store.page_info().get_untracked();
        assert_eq!(info.page_size(), 50);
        assert_eq!(info.total(), 10);

        runtime.dispose();
    }

    #[test]
    fn selection_signals_follow_dispatch() {
        let runtime = create_runtime();
        let store = create_item_store(|n: &u32| *n, &CollectionConfig::default()).expect("store");
        let five_selected = store.is_selected(5);

        store.dispatch_action(ItemsAction::AddAll((1..=10).collect()));
        store.dispatch_action(ItemsAction::Select {
            item: 5,
            selected: true,
        });
        assert!(five_selected.get_untracked());

        store.dispatch_action(ItemsAction::add_filter("even", |n: &u32| n % 2 == 0));
        assert_eq!(store.visible().get_untracked(), vec![2, 4, 6, 8, 10]);
        assert_eq!(store.selected_items().get_untracked(), vec![5]);

        store.dispatch_action(ItemsAction::ToggleSelection(5));
        assert!(!five_selected.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn context_handle_sees_dispatched_actions() {
        let runtime = create_runtime();
        let store = create_item_store(|n: &u32| *n, &CollectionConfig::default()).expect("store");
        let provided = Rc::new(Cell::new(None));

        // Context lookups need a reactive owner; the effect body provides one.
        let slot = Rc::clone(&provided);
        create_isomorphic_effect(move |_| {
            provide_item_store(store);
            slot.set(Some(use_item_store::<u32, u32>()));
        });
        let found = provided.get().expect("store from context");

        store.dispatch_action(ItemsAction::AddAll(vec![1, 2, 3]));
        assert_eq!(found.visible().get_untracked(), vec![1, 2, 3]);

        found.dispatch_action(ItemsAction::SelectAll);
        assert_eq!(store.selected_items().get_untracked(), vec![1, 2, 3]);

        runtime.dispose();
    }

    #[test]
    fn invalid_config_is_rejected() {
        let runtime = create_runtime();
        let config = CollectionConfig {
            default_page_size: 0,
            ..CollectionConfig::default()
        };
        assert!(matches!(
            create_item_store(|n: &u32| *n, &config),
            Err(ItemsError::InvalidConfig(_))
        ));
        runtime.dispose();
    }
}
