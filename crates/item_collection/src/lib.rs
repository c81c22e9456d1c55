//! Immutable item collection model for list, table, and card-view components.
//!
//! [`Items`] holds the source items of a list together with named filters, an optional
//! [`SortInfo`], the current [`PageInfo`] window, and an id-based [`SelectionInfo`]. Every
//! transition returns a new value, which lets a reactive store publish each state as a whole.
//! [`Entries`] is the grouped variant used by menu-like components.
//!
//! The crate carries no UI framework dependency; `item_store` wraps it for Leptos.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod entries;
pub mod error;
pub mod items;
pub mod page;
pub mod selection;
pub mod sort;

pub use config::CollectionConfig;
pub use entries::{Entries, Entry, Group};
pub use error::ItemsError;
pub use items::{Identify, Items, Predicate};
pub use page::{PageInfo, DEFAULT_PAGE_SIZE};
pub use selection::{SelectionInfo, SelectionScope};
pub use sort::{Comparator, SortInfo};
