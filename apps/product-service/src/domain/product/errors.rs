//! Repository errors.

use thiserror::Error;

/// Errors from repository operations.
///
/// Absence of a record is not an error; lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Query execution error.
    #[error("Query error: {0}")]
    Query(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_cause() {
        let error = RepositoryError::Query("no such table: products".to_string());
        assert_eq!(error.to_string(), "Query error: no such table: products");
    }
}
