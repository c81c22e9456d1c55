//! Named sort specifications.

use std::{cmp::Ordering, fmt, sync::Arc};

/// Shared comparator used by [`SortInfo`].
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Named comparator plus sort direction.
///
/// The name identifies the sort for control-bar UI (for example, the column header that owns
/// it). A descending sort applies the reversed comparator.
pub struct SortInfo<T> {
    name: String,
    comparator: Comparator<T>,
    ascending: bool,
}

impl<T: 'static> SortInfo<T> {
    /// Creates a sort from a comparator and direction.
    pub fn new(
        name: impl Into<String>,
        comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
        ascending: bool,
    ) -> Self {
        Self {
            name: name.into(),
            comparator: Arc::new(comparator),
            ascending,
        }
    }

    /// Creates a sort ordering items by an extracted key.
    pub fn by_key<K, F>(name: impl Into<String>, key: F, ascending: bool) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(name, move |a, b| key(a).cmp(&key(b)), ascending)
    }

    /// Creates a sort using the natural ordering of the items.
    pub fn natural(name: impl Into<String>, ascending: bool) -> Self
    where
        T: Ord,
    {
        Self::new(name, T::cmp, ascending)
    }

    /// Name identifying this sort.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the sort runs in ascending order.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the same sort with the opposite direction.
    pub fn toggle(&self) -> Self {
        self.with_direction(!self.ascending)
    }

    /// Returns the same sort with an explicit direction.
    pub fn with_direction(&self, ascending: bool) -> Self {
        Self {
            ascending,
            ..self.clone()
        }
    }

    /// Compares two items honoring the sort direction.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let ordering = (self.comparator)(a, b);
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

impl<T> Clone for SortInfo<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            comparator: Arc::clone(&self.comparator),
            ascending: self.ascending,
        }
    }
}

impl<T> fmt::Debug for SortInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortInfo")
            .field("name", &self.name)
            .field("ascending", &self.ascending)
            .finish_non_exhaustive()
    }
}
