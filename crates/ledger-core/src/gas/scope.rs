//! Per-request cost accumulation.
//!
//! A [`RequestScope`] is the explicit stand-in for a request context: the
//! caller creates one per logical request and passes it by `&mut` into every
//! store operation. Operations record their [`OperationKind`]s into it and
//! the final [`Response`](crate::store::Response) copies its totals.
//!
//! A scope belongs to exactly one request. Concurrent requests each get
//! their own scope, even when they share a store.

use super::{CostSummary, OperationKind};

/// Accumulated cost and free-state for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestScope {
    /// Signed sum of every recorded operation's cost
    total_cost: i64,
    /// True until an operation that forces payment is recorded
    free: bool,
    /// Every recorded operation, in order
    operations: Vec<OperationKind>,
}

impl Default for RequestScope {
    fn default() -> Self {
        Self {
            total_cost: 0,
            free: true,
            operations: Vec::new(),
        }
    }
}

impl RequestScope {
    /// Create a fresh scope (`total_cost = 0`, `free = true`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_cost(&self) -> i64 {
        self.total_cost
    }

    pub fn is_free(&self) -> bool {
        self.free
    }

    /// Operations recorded so far, oldest first.
    pub fn operations(&self) -> &[OperationKind] {
        &self.operations
    }

    /// Record a single operation.
    pub fn record(&mut self, op: OperationKind) {
        if op.forces_paid() {
            self.free = false;
        }
        self.total_cost = self.total_cost.saturating_add(op.cost());
        self.operations.push(op);

        tracing::trace!(
            op = %op,
            cost = op.cost(),
            total_cost = self.total_cost,
            free = self.free,
            "scope: recorded operation"
        );
    }

    /// Record operations in order.
    pub fn record_operations(&mut self, ops: &[OperationKind]) -> &mut Self {
        for &op in ops {
            self.record(op);
        }
        self
    }

    /// Record into the scope held in `slot`, creating a default one first if
    /// the request has none yet. An existing scope is mutated in place, so a
    /// request keeps exactly one scope for its lifetime.
    pub fn record_operations_in<'a>(
        slot: &'a mut Option<RequestScope>,
        ops: &[OperationKind],
    ) -> &'a mut RequestScope {
        slot.get_or_insert_with(RequestScope::new)
            .record_operations(ops)
    }

    /// Snapshot the scope's totals and per-kind counts.
    pub fn summary(&self) -> CostSummary {
        let mut summary = CostSummary {
            total_cost: self.total_cost,
            free: self.free,
            operation_count: self.operations.len() as u64,
            ..CostSummary::default()
        };
        for op in &self.operations {
            let counter = match op {
                OperationKind::Read => &mut summary.reads,
                OperationKind::Write => &mut summary.writes,
                OperationKind::Modify => &mut summary.modifies,
                OperationKind::Delete => &mut summary.deletes,
            };
            *counter += 1;
        }
        summary
    }
}
