use std::fmt;

/// Error type for movie store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A previous holder of the collection lock panicked.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "movie store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
