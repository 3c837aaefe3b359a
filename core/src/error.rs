use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The record type has no table in the registry
    #[error("no table registered for record `{record}`")]
    TableNotFound { record: &'static str },

    /// The record's table has no column mapped to the field
    #[error("no column mapped to `{record}::{field}`")]
    ColumnNotFound {
        record: &'static str,
        field: &'static str,
    },

    /// Identifier that cannot be rendered inside double quotes
    #[error("unsupported identifier {0:?}: identifiers must not contain '\"'")]
    UnsupportedIdentifier(String),

    /// Statement that cannot be rendered as built
    #[error("Statement error: {0}")]
    Statement(String),

    /// Error executing a statement
    #[error("Execution error: {0}")]
    Execution(String),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for serialization and execution
pub type Result<T> = std::result::Result<T, Error>;
