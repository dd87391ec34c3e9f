//! Hash table error definitions

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Hash table error types
///
/// Lookups never fail; a miss is `None`. Errors only come from construction
/// and from fallible allocation.
#[derive(Debug)]
pub enum TableError {
    /// Table configuration rejected, e.g. a bucket count of zero
    InvalidConfiguration(String),
    /// Memory for buckets or chain entries could not be reserved
    ResourceExhaustion(TryReserveError),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            TableError::ResourceExhaustion(err) => write!(f, "Resource exhaustion: {}", err),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TableError::ResourceExhaustion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TryReserveError> for TableError {
    fn from(err: TryReserveError) -> Self {
        TableError::ResourceExhaustion(err)
    }
}

/// Result type for hash table operations
pub type TableResult<T> = Result<T, TableError>;
