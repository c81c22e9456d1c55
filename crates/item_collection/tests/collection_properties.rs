//! Property-based tests for the item collection model.
//!
//! Uses proptest to verify:
//! 1. Page index and page count stay in range after arbitrary operation sequences
//! 2. Totals always match the visible item count
//! 3. Filter composition is order independent
//! 4. Descending sort is the exact reverse of ascending sort for distinct items
//! 5. Clearing restores the freshly constructed state

use item_collection::{Items, PageInfo, SortInfo};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddAll(Vec<u32>),
    Clear,
    AddFilter(u8, u32),
    RemoveFilter(u8),
    ClearFilters,
    SortBy(bool),
    ToggleSort,
    GotoPage(usize),
    GotoFirstPage,
    GotoLastPage,
    NextPage,
    PreviousPage,
    SetPageSize(usize),
    Select(u32, bool),
    ToggleSelection(u32),
    SelectNone,
    SelectVisible,
    SelectPage,
    SelectAll,
}

fn collection_op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::collection::vec(0u32..500, 0..120).prop_map(Op::AddAll),
        Just(Op::Clear),
        (0u8..4, 1u32..6).prop_map(|(name, modulus)| Op::AddFilter(name, modulus)),
        (0u8..4).prop_map(Op::RemoveFilter),
        Just(Op::ClearFilters),
        any::<bool>().prop_map(Op::SortBy),
        Just(Op::ToggleSort),
    ]
}

fn page_op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..40).prop_map(Op::GotoPage),
        Just(Op::GotoFirstPage),
        Just(Op::GotoLastPage),
        Just(Op::NextPage),
        Just(Op::PreviousPage),
        (0usize..30).prop_map(Op::SetPageSize),
    ]
}

fn selection_op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..500, any::<bool>()).prop_map(|(id, selected)| Op::Select(id, selected)),
        (0u32..500).prop_map(Op::ToggleSelection),
        Just(Op::SelectNone),
        Just(Op::SelectVisible),
        Just(Op::SelectPage),
        Just(Op::SelectAll),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        collection_op_strategy(),
        page_op_strategy(),
        selection_op_strategy(),
    ]
}

fn numbers() -> Items<u32, u32> {
    Items::new(|n: &u32| *n)
}

fn apply(items: &Items<u32, u32>, op: Op) -> Items<u32, u32> {
    match op {
        Op::AddAll(values) => items.add_all(values),
        Op::Clear => items.clear(),
        Op::AddFilter(name, modulus) => {
            items.add_filter(format!("f{name}"), move |n: &u32| n % modulus == 0)
        }
        Op::RemoveFilter(name) => items.remove_filter(&format!("f{name}")),
        Op::ClearFilters => items.clear_filters(),
        Op::SortBy(ascending) => items.sort_by(SortInfo::natural("value", ascending)),
        Op::ToggleSort => items.toggle_sort(),
        Op::GotoPage(index) => items.goto_page(index),
        Op::GotoFirstPage => items.goto_first_page(),
        Op::GotoLastPage => items.goto_last_page(),
        Op::NextPage => items.next_page(),
        Op::PreviousPage => items.previous_page(),
        Op::SetPageSize(size) => items.set_page_size(size).unwrap_or_else(|_| items.clone()),
        Op::Select(id, selected) => items.select(&id, selected),
        Op::ToggleSelection(id) => items.toggle_selection(&id),
        Op::SelectNone => items.select_none(),
        Op::SelectVisible => items.select_visible(),
        Op::SelectPage => items.select_page(),
        Op::SelectAll => items.select_all(),
    }
}

fn visible(items: &Items<u32, u32>) -> Vec<u32> {
    items.visible().copied().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn page_invariants_hold_after_any_operation_sequence(
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut items = numbers();
        for op in ops {
            items = apply(&items, op);
            let info = items.page_info();
            let visible_len = items.visible().len();

            prop_assert!(info.pages() >= 1);
            prop_assert!(info.page_index() < info.pages());
            prop_assert!(info.page_size() >= 1);
            prop_assert_eq!(info.total(), visible_len);
            prop_assert_eq!(info.pages(), visible_len.div_ceil(info.page_size()).max(1));
            prop_assert!(items.page_window().len() <= info.page_size());
            prop_assert_eq!(items.first_page(), info.page_index() == 0);
            prop_assert_eq!(items.last_page(), info.page_index() + 1 == info.pages());
        }
    }

    #[test]
    fn filter_order_does_not_change_visible_items(
        values in prop::collection::vec(0u32..1000, 0..200),
        first in 1u32..8,
        second in 1u32..8,
    ) {
        let base = numbers().add_all(values);
        let ab = base
            .add_filter("a", move |n: &u32| n % first == 0)
            .add_filter("b", move |n: &u32| n % second == 0);
        let ba = base
            .add_filter("b", move |n: &u32| n % second == 0)
            .add_filter("a", move |n: &u32| n % first == 0);
        prop_assert_eq!(visible(&ab), visible(&ba));
    }

    #[test]
    fn descending_sort_reverses_ascending_for_distinct_items(
        values in prop::collection::btree_set(0u32..10_000, 0..150),
    ) {
        let mut shuffled: Vec<u32> = values.into_iter().collect();
        shuffled.reverse();
        let third = shuffled.len() / 3;
        shuffled.rotate_left(third);

        let base = numbers().add_all(shuffled);
        let ascending = visible(&base.sort_by(SortInfo::natural("value", true)));
        let mut descending = visible(&base.sort_by(SortInfo::natural("value", false)));
        descending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn clear_after_add_all_matches_fresh_collection(
        values in prop::collection::vec(any::<u32>(), 0..100),
    ) {
        let fresh = numbers();
        let cleared = fresh.add_all(values).select_all().clear();
        prop_assert_eq!(cleared.page_info(), fresh.page_info());
        prop_assert_eq!(cleared.page_info(), PageInfo::default());
        prop_assert_eq!(cleared.selection(), fresh.selection());
        prop_assert_eq!(cleared.all().len(), 0);
    }

    #[test]
    fn clearing_filters_and_selection_is_idempotent(
        values in prop::collection::vec(0u32..100, 0..100),
        modulus in 1u32..5,
    ) {
        let items = numbers()
            .add_all(values)
            .add_filter("m", move |n: &u32| n % modulus == 0)
            .select_visible();
        let once = items.clear_filters();
        let twice = once.clear_filters();
        prop_assert_eq!(visible(&once), visible(&twice));
        prop_assert!(items.select_none().selection().is_empty());
        prop_assert!(items.select_none().select_none().selection().is_empty());
    }

    #[test]
    fn selection_survives_filtering_without_duplicates(
        values in prop::collection::btree_set(0u32..300, 1..80),
        modulus in 2u32..6,
    ) {
        let values: Vec<u32> = values.into_iter().collect();
        let selected = numbers().add_all(values.clone()).select_all();
        let filtered = selected.add_filter("m", move |n: &u32| n % modulus == 0);
        prop_assert_eq!(filtered.selected_count(), values.len());
        prop_assert_eq!(filtered.selected_items().count(), values.len());
        prop_assert!(filtered.all_visible_selected() || filtered.visible().len() == 0);
    }
}
