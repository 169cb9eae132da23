//! Error types for selq

use thiserror::Error;

/// Result type alias for selq operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error types for query building
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No table name was set before rendering
    #[error("table name is not specified")]
    MissingTable,
}

impl QueryError {
    /// Check if this is a missing table error
    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable)
    }
}
