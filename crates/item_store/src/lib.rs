//! Leptos reactive store for [`item_collection::Items`].
//!
//! Components create an [`ItemStore`], dispatch [`ItemsAction`] values from event handlers, and
//! read derived signals (`page_window`, `range`, `selected_items`, ...) for rendering. All state
//! transitions go through [`reduce_items`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod reducer;
mod store;

pub use reducer::{reduce_items, ItemsAction};
pub use store::{create_item_store, provide_item_store, use_item_store, ItemStore};
