//! Static cost table for store operations.
//!
//! Every operation a store performs on behalf of a request is classified
//! into an [`OperationKind`]. The kind's cost and whether it makes the
//! request paid are looked up from [`OPERATION_COSTS`], so adding a kind
//! means adding one row here and nothing in the accounting code.
//!
//! # Cost Schedule
//!
//! | Kind   | Cost | Forces paid |
//! |--------|------|-------------|
//! | Delete | -15  | no          |
//! | Read   | 1    | no          |
//! | Modify | 5    | yes         |
//! | Write  | 20   | yes         |
//!
//! Delete carries a negative cost (a rebate), so it lowers the running total.

use std::fmt;

/// A categorized action performed against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Delete,
    Read,
    Modify,
    Write,
}

/// One row of the cost schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationCost {
    pub kind: OperationKind,
    /// Signed cost added to the request total
    pub cost: i64,
    /// Whether recording this kind makes the request paid
    pub forces_paid: bool,
}

/// The cost schedule, one entry per [`OperationKind`] in declaration order.
pub const OPERATION_COSTS: &[OperationCost] = &[
    OperationCost {
        kind: OperationKind::Delete,
        cost: -15,
        forces_paid: false,
    },
    OperationCost {
        kind: OperationKind::Read,
        cost: 1,
        forces_paid: false,
    },
    OperationCost {
        kind: OperationKind::Modify,
        cost: 5,
        forces_paid: true,
    },
    OperationCost {
        kind: OperationKind::Write,
        cost: 20,
        forces_paid: true,
    },
];

impl OperationKind {
    /// Every kind, in schedule order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Delete,
        OperationKind::Read,
        OperationKind::Modify,
        OperationKind::Write,
    ];

    /// Look up this kind's row in [`OPERATION_COSTS`].
    pub fn schedule(self) -> &'static OperationCost {
        // The table is declared in the same order as `ALL`.
        &OPERATION_COSTS[self as usize]
    }

    /// Signed cost of one occurrence.
    pub fn cost(self) -> i64 {
        self.schedule().cost
    }

    /// Whether one occurrence turns a free request into a paid one.
    pub fn forces_paid(self) -> bool {
        self.schedule().forces_paid
    }

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Delete => "delete",
            OperationKind::Read => "read",
            OperationKind::Modify => "modify",
            OperationKind::Write => "write",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Format the schedule as a human-readable table.
pub fn format_cost_schedule() -> String {
    let mut s = String::from("Operation Cost Schedule\n");
    for row in OPERATION_COSTS {
        s.push_str(&format!(
            "  {:<6} {:>4}{}\n",
            row.kind.name(),
            row.cost,
            if row.forces_paid { "  (paid)" } else { "" }
        ));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_matches_declaration_order() {
        for kind in OperationKind::ALL {
            assert_eq!(kind.schedule().kind, kind, "row mismatch for {kind}");
        }
        assert_eq!(OPERATION_COSTS.len(), OperationKind::ALL.len());
    }

    #[test]
    fn test_costs() {
        assert_eq!(OperationKind::Delete.cost(), -15);
        assert_eq!(OperationKind::Read.cost(), 1);
        assert_eq!(OperationKind::Modify.cost(), 5);
        assert_eq!(OperationKind::Write.cost(), 20);
    }

    #[test]
    fn test_only_modify_and_write_force_paid() {
        let paid: Vec<_> = OperationKind::ALL
            .into_iter()
            .filter(|k| k.forces_paid())
            .collect();
        assert_eq!(paid, vec![OperationKind::Modify, OperationKind::Write]);
    }

    #[test]
    fn test_format_cost_schedule() {
        let formatted = format_cost_schedule();
        assert!(formatted.contains("delete"));
        assert!(formatted.contains("-15"));
        assert!(formatted.contains("write"));
    }
}
