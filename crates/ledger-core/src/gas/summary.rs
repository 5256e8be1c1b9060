//! Cost summary for a finished request.

use serde::Serialize;

/// Snapshot of a [`RequestScope`](super::RequestScope).
///
/// Mirrors the scope's totals and breaks the recorded operations down by
/// kind, for diagnostics and structured output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CostSummary {
    /// Signed sum of all recorded costs
    pub total_cost: i64,

    /// Whether no paid operation was recorded
    pub free: bool,

    pub reads: u64,
    pub writes: u64,
    pub modifies: u64,
    pub deletes: u64,

    /// Number of operations recorded
    pub operation_count: u64,
}
