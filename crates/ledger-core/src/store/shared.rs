use std::sync::Arc;

use parking_lot::Mutex;

use super::{CacheState, Response, Store};
use crate::error::StoreResult;
use crate::gas::RequestScope;

/// A [`Store`] shared between concurrent requests.
///
/// One mutex guards the whole store, and each operation holds it from start
/// to finish, so a `replace` and its cache invalidation are never observed
/// halfway. Cloning shares the same underlying store. Scopes stay
/// per-request and are never stored here.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn replace(&self, scope: &mut RequestScope, values: Vec<i64>) -> Response {
        self.inner.lock().replace(scope, values)
    }

    pub fn read_sorted(&self, scope: &mut RequestScope) -> StoreResult<Response> {
        self.inner.lock().read_sorted(scope)
    }

    pub fn cache_status(&self) -> CacheState {
        self.inner.lock().cache_status()
    }
}
