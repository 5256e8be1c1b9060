//! Operation cost metering.
//!
//! Every store operation is charged against the [`RequestScope`] of the
//! request that triggered it. The scope keeps a signed running total and a
//! `free` flag that flips to false once any paid operation is recorded.
//!
//! # Architecture
//!
//! 1. **Cost Table** - [`OperationKind`] and its static cost schedule
//! 2. **Request Scope** - per-request accumulator passed explicitly by `&mut`
//! 3. **Summary** - [`CostSummary`] snapshot for reporting
//!
//! # Usage
//!
//! ```
//! use ledger_core::gas::{OperationKind, RequestScope};
//!
//! let mut scope = RequestScope::new();
//! scope.record_operations(&[OperationKind::Write, OperationKind::Delete]);
//!
//! assert_eq!(scope.total_cost(), 5);
//! assert!(!scope.is_free());
//! ```

mod cost_table;
mod scope;
mod summary;

pub use cost_table::*;
pub use scope::*;
pub use summary::*;
