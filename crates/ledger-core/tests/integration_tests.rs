//! Integration tests for ledger-core.
//!
//! These tests verify cost accounting and cache behavior end to end through
//! the public API.

use ledger_core::gas::{OperationKind, RequestScope};
use ledger_core::sort::sort_values;
use ledger_core::store::{CacheState, SharedStore, Store};

/// Default store, fresh scope: the first read sorts and pays for the write.
#[test]
fn test_default_store_first_and_second_read() {
    let mut store = Store::new();

    let mut scope = RequestScope::new();
    let first = store.read_sorted(&mut scope).expect("read_sorted");
    assert_eq!(first.data(), Some(&[0, 1, 3, 3, 4, 4, 6, 8][..]));
    assert_eq!(first.total_cost(), 21);
    assert!(!first.is_free());

    let mut scope = RequestScope::new();
    let second = store.read_sorted(&mut scope).expect("read_sorted");
    assert_eq!(second.data(), first.data());
    assert_eq!(second.total_cost(), 1);
    assert!(second.is_free());
}

/// Replace on a fresh scope costs Write + Delete.
#[test]
fn test_replace_on_fresh_scope() {
    let mut store = Store::new();
    let mut scope = RequestScope::new();

    let response = store.replace(&mut scope, vec![2, 1, 3]);

    assert_eq!(response.total_cost(), 5);
    assert!(!response.is_free());
    assert!(response.data().is_none());
    assert_eq!(
        scope.operations(),
        &[OperationKind::Write, OperationKind::Delete]
    );
}

/// Replace then read in separate requests, then a third request hits the cache.
#[test]
fn test_replace_read_read_across_requests() {
    let mut store = Store::new();

    let response = store.replace(&mut RequestScope::new(), vec![2, 1, 3]);
    assert_eq!(response.total_cost(), 5);

    let response = store
        .read_sorted(&mut RequestScope::new())
        .expect("read_sorted");
    assert_eq!(response.data(), Some(&[1, 2, 3][..]));
    assert_eq!(response.total_cost(), 21);
    assert!(!response.is_free());

    let response = store
        .read_sorted(&mut RequestScope::new())
        .expect("read_sorted");
    assert_eq!(response.data(), Some(&[1, 2, 3][..]));
    assert!(response.is_free());
}

/// Both operations on one scope accumulate into a single total.
#[test]
fn test_replace_and_read_share_one_scope() {
    let mut store = Store::new();
    let mut scope = RequestScope::new();

    let after_replace = store.replace(&mut scope, vec![2, 1, 3]);
    assert!(!after_replace.is_free());

    let after_read = store.read_sorted(&mut scope).expect("read_sorted");
    assert_eq!(after_read.total_cost(), 26);
    assert!(!after_read.is_free());

    let summary = scope.summary();
    assert_eq!(summary.writes, 2);
    assert_eq!(summary.deletes, 1);
    assert_eq!(summary.reads, 1);
}

/// A replace never leaves a stale sorted view behind.
#[test]
fn test_no_stale_cache_after_replace() {
    let mut store = Store::new();
    let lists: Vec<Vec<i64>> = vec![
        vec![5, 5, 1],
        vec![],
        vec![-3],
        vec![10, -10, 0, 7, 7, -1],
    ];

    for values in lists {
        store
            .read_sorted(&mut RequestScope::new())
            .expect("warm cache");
        assert_eq!(store.cache_status(), CacheState::Cached);

        store.replace(&mut RequestScope::new(), values.clone());
        assert_eq!(store.cache_status(), CacheState::Uncached);

        let response = store
            .read_sorted(&mut RequestScope::new())
            .expect("read_sorted");
        assert_eq!(response.into_data(), Some(sort_values(&values)));
    }
}

#[test]
fn test_shared_store_matches_single_owner_costs() {
    let store = SharedStore::new(Store::new());

    let first = store
        .read_sorted(&mut RequestScope::new())
        .expect("read_sorted");
    let second = store
        .read_sorted(&mut RequestScope::new())
        .expect("read_sorted");
    let replaced = store.replace(&mut RequestScope::new(), vec![1]);

    assert_eq!(first.total_cost(), 21);
    assert_eq!(second.total_cost(), 1);
    assert_eq!(replaced.total_cost(), 5);
    assert_eq!(store.cache_status(), CacheState::Uncached);
}
