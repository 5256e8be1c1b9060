//! Keyed integer-list store with a memoized sorted view.
//!
//! The store holds its source list under [`UNSORTED_LIST_KEY`]. The sorted
//! view (reported under [`SORTED_LIST_KEY`]) is not a separate entry: it is
//! carried as the `SortedView` of the source entry itself, so replacing
//! the source drops the cache in the same assignment.
//!
//! ```text
//! Uncached --read_sorted (computes, Write)--> Cached
//! Cached   --read_sorted (hit)-------------> Cached
//! Cached   --replace-----------------------> Uncached
//! ```
//!
//! Every operation records its [`OperationKind`]s into the caller's
//! [`RequestScope`].

mod response;
mod shared;

pub use response::Response;
pub use shared::SharedStore;

use std::collections::HashMap;

use crate::error::{StoreError, StoreResult};
use crate::gas::{OperationKind, RequestScope};
use crate::sort::sort_values;

/// Key of the source list.
pub const UNSORTED_LIST_KEY: &str = "unsorted_list";

/// Name of the memoized sorted view of [`UNSORTED_LIST_KEY`].
pub const SORTED_LIST_KEY: &str = "sorted_list";

/// Contents of a freshly constructed store.
pub const DEFAULT_UNSORTED_LIST: [i64; 8] = [8, 4, 3, 0, 1, 3, 6, 4];

/// Whether a list currently has a valid sorted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Uncached,
    Cached,
}

#[derive(Debug, Clone)]
enum SortedView {
    Uncached,
    /// Sorted form of the owning entry's `values`
    Cached(Vec<i64>),
}

#[derive(Debug, Clone)]
struct ListEntry {
    values: Vec<i64>,
    sorted: SortedView,
}

impl ListEntry {
    fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            sorted: SortedView::Uncached,
        }
    }

    fn cache_state(&self) -> CacheState {
        match self.sorted {
            SortedView::Uncached => CacheState::Uncached,
            SortedView::Cached(_) => CacheState::Cached,
        }
    }
}

/// Single-owner store. Wrap it in a [`SharedStore`] to use it from several
/// requests at once.
#[derive(Debug, Clone)]
pub struct Store {
    lists: HashMap<String, ListEntry>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store seeded with [`DEFAULT_UNSORTED_LIST`].
    pub fn new() -> Self {
        Self::with_values(DEFAULT_UNSORTED_LIST.to_vec())
    }

    /// Create a store seeded with `values`.
    pub fn with_values(values: Vec<i64>) -> Self {
        let mut lists = HashMap::new();
        lists.insert(UNSORTED_LIST_KEY.to_string(), ListEntry::new(values));
        Self { lists }
    }

    /// Overwrite the source list and drop any cached sorted view.
    ///
    /// Always records `[Write, Delete]`, even when there was no cache to
    /// delete. The response carries no data, only the scope's totals.
    pub fn replace(&mut self, scope: &mut RequestScope, values: Vec<i64>) -> Response {
        let len = values.len();
        let previous = self
            .lists
            .insert(UNSORTED_LIST_KEY.to_string(), ListEntry::new(values));
        let dropped_cache =
            previous.is_some_and(|entry| entry.cache_state() == CacheState::Cached);

        tracing::debug!(
            key = UNSORTED_LIST_KEY,
            len,
            dropped_cache,
            "store: replaced list, {} invalidated",
            SORTED_LIST_KEY
        );

        scope.record_operations(&[OperationKind::Write, OperationKind::Delete]);
        Response::from_scope(scope, None)
    }

    /// Return the sorted view of the source list, computing and caching it
    /// on a miss.
    ///
    /// Records `Read`, plus `Write` when the view had to be computed. A hit
    /// in a fresh scope therefore stays free.
    pub fn read_sorted(&mut self, scope: &mut RequestScope) -> StoreResult<Response> {
        scope.record(OperationKind::Read);

        let entry = self.lists.get_mut(UNSORTED_LIST_KEY).ok_or_else(|| {
            StoreError::MissingSourceData {
                key: UNSORTED_LIST_KEY.to_string(),
            }
        })?;

        if let SortedView::Cached(sorted) = &entry.sorted {
            tracing::debug!(key = SORTED_LIST_KEY, len = sorted.len(), "store: cache hit");
            let data = sorted.clone();
            return Ok(Response::from_scope(scope, Some(data)));
        }

        let sorted = sort_values(&entry.values);
        debug_assert!(crate::sort::is_sorted_ascending(&sorted));
        entry.sorted = SortedView::Cached(sorted.clone());
        scope.record(OperationKind::Write);

        tracing::debug!(key = SORTED_LIST_KEY, len = sorted.len(), "store: cache filled");
        Ok(Response::from_scope(scope, Some(sorted)))
    }

    /// Current cache state of the source list. Records nothing.
    pub fn cache_status(&self) -> CacheState {
        self.lists
            .get(UNSORTED_LIST_KEY)
            .map(ListEntry::cache_state)
            .unwrap_or(CacheState::Uncached)
    }

    #[cfg(test)]
    pub(crate) fn unsorted(&self) -> Option<&[i64]> {
        self.lists
            .get(UNSORTED_LIST_KEY)
            .map(|entry| entry.values.as_slice())
    }
}
