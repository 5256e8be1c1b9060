//! Ledger Core
//!
//! Cost-metered store for an integer list with a memoized sorted view.
//!
//! Each request gets its own [`gas::RequestScope`]. Store operations record
//! what they did into it, and every [`store::Response`] carries the scope's
//! running cost and whether the request has stayed free.
//!
//! # Core Modules
//!
//! - [`gas`]: Operation cost table and per-request accumulation
//! - [`store`]: The list store, its sorted-view cache, and a shared wrapper
//! - [`sort`]: Ascending sort used to fill the cache
//! - [`config`]: Logging settings for the process harness
//! - [`error`]: Store error types
//!
//! # Example
//!
//! ```
//! use ledger_core::gas::RequestScope;
//! use ledger_core::store::Store;
//!
//! let mut store = Store::new();
//!
//! let mut scope = RequestScope::new();
//! let response = store.read_sorted(&mut scope)?;
//! assert_eq!(response.data(), Some(&[0, 1, 3, 3, 4, 4, 6, 8][..]));
//! assert_eq!(response.total_cost(), 21);
//!
//! // The sorted view is now cached, so a new request reads it for free.
//! let mut scope = RequestScope::new();
//! let response = store.read_sorted(&mut scope)?;
//! assert_eq!(response.total_cost(), 1);
//! assert!(response.is_free());
//! # Ok::<(), ledger_core::error::StoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod gas;
pub mod sort;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use gas::{OperationKind, RequestScope};
pub use store::{Response, SharedStore, Store};
