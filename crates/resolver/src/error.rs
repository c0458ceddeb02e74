// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for the resolver pipeline
//!
//! These are the precondition failures of the caller-facing wrapper, the
//! one error class the resolver surfaces. They are checked before the
//! cascade runs; once it runs, nothing it encounters is an error.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for resolver operations
pub type QualifyResult<T> = Result<T, QualifyError>;

/// Blocking preconditions surfaced to the host
#[derive(Debug, Error, Clone, Serialize)]
pub enum QualifyError {
    /// No connection/database is selected for the buffer
    #[error("No active connection or database is selected")]
    NoActiveDataSource,

    /// The active connection id is not in the registry
    #[error("Connection '{0}' is not configured")]
    UnknownConnection(String),

    /// The active database's schema was never loaded, so resolution would
    /// silently degenerate
    #[error("Schema for database '{database}' on connection '{connection_id}' has not been loaded")]
    SchemaNotLoaded {
        connection_id: String,
        database: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_not_loaded_names_the_source() {
        let err = QualifyError::SchemaNotLoaded {
            connection_id: "contoso".into(),
            database: "Prod".into(),
        };
        assert!(err.to_string().contains("Prod"));
        assert!(err.to_string().contains("contoso"));
    }
}
