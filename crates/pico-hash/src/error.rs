use std::fmt;

/// Failure reported by [`HashTable`](crate::HashTable) operations.
///
/// The only failure mode is allocation exhaustion. Lookups never fail; a
/// missing key is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// Bucket array could not be allocated.
    Buckets { count: usize },
    /// Entry (key copy + chain slot) could not be allocated.
    Entry { key_len: usize },
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::Buckets { count } => {
                write!(f, "hash table: cannot allocate {count} buckets")
            }
            HashError::Entry { key_len } => {
                write!(f, "hash table: cannot allocate entry for a {key_len}-byte key")
            }
        }
    }
}

impl std::error::Error for HashError {}
