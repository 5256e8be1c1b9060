//! Finalized operation results.

use serde::Serialize;

use crate::gas::RequestScope;

/// Result of a store operation: optional output data plus the cost totals
/// of the request scope at the time the operation finished.
///
/// Immutable once built. `data` is always an owned copy, so callers cannot
/// reach back into store state through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    data: Option<Vec<i64>>,
    total_cost: i64,
    free: bool,
}

impl Response {
    /// Copy the scope's current totals next to `data`.
    pub fn from_scope(scope: &RequestScope, data: Option<Vec<i64>>) -> Self {
        Self {
            data,
            total_cost: scope.total_cost(),
            free: scope.is_free(),
        }
    }

    /// Output data. `None` for operations that report only cost, such as
    /// `replace`.
    pub fn data(&self) -> Option<&[i64]> {
        self.data.as_deref()
    }

    pub fn into_data(self) -> Option<Vec<i64>> {
        self.data
    }

    pub fn total_cost(&self) -> i64 {
        self.total_cost
    }

    pub fn is_free(&self) -> bool {
        self.free
    }
}
