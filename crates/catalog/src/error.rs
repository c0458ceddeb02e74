// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for catalog operations
//!
//! Fetch errors are recoverable by design: the resolution cascade maps
//! every variant here to an empty result and keeps going. Nothing in this
//! enum ever reaches the user as a failure.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while talking to a cluster
#[derive(Debug, Error, Clone, Serialize)]
pub enum CatalogError {
    /// Failed to connect to the cluster
    #[error("Failed to connect to cluster: {0}")]
    ConnectionFailed(String),

    /// The schema query failed on the cluster side
    #[error("Schema query failed: {0}")]
    QueryFailed(String),

    /// The schema query timed out
    #[error("Schema query timed out after {0}s")]
    QueryTimeout(u64),

    /// The connection id is not present in the registry
    #[error("Connection '{0}' is not configured")]
    UnknownConnection(String),

    /// The requested database does not exist on the cluster
    #[error("Database '{1}' not found on connection '{0}'")]
    DatabaseNotFound(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_subject() {
        let err = CatalogError::DatabaseNotFound("conn-1".into(), "Prod".into());
        assert_eq!(err.to_string(), "Database 'Prod' not found on connection 'conn-1'");
    }

    #[test]
    fn test_errors_serialize_for_diagnostics() {
        let err = CatalogError::ConnectionFailed("dns failure".into());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("ConnectionFailed"));
    }
}
