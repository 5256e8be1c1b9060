//! Store error types.

/// Errors surfaced by [`Store`](crate::store::Store) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Neither a cached sorted list nor its source list exists.
    ///
    /// The store always seeds its source list and `replace` always
    /// repopulates it, so this indicates a broken invariant.
    MissingSourceData {
        /// Key the source list was expected under
        key: String,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::MissingSourceData { key } => {
                write!(f, "no unsorted list stored under key \"{}\"", key)
            }
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;
