// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Service traits for cluster metadata
//!
//! The resolver never talks to a cluster directly; it goes through these
//! traits so the surrounding application can plug in its transport and
//! tests can plug in fixtures.

use std::collections::BTreeSet;

use crate::error::CatalogResult;
use crate::metadata::{Connection, Schema};

/// The configured cluster connections.
///
/// Queried synchronously from state the host has already loaded; the
/// registry never performs I/O.
pub trait ConnectionRegistry: Send + Sync {
    /// All configured connections, in configuration order
    fn connections(&self) -> Vec<Connection>;

    /// Look up one connection by id
    fn connection(&self, id: &str) -> Option<Connection> {
        self.connections().into_iter().find(|c| c.id == id)
    }
}

/// Asynchronous schema lookups against a cluster.
///
/// Both operations may fail; callers in the resolution cascade treat a
/// failure as an empty result and continue, so implementations should
/// return errors rather than panic or retry indefinitely.
#[async_trait::async_trait]
pub trait SchemaService: Send + Sync {
    /// List the database names available on a connection
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ConnectionFailed` if the cluster is
    /// unreachable, `CatalogError::UnknownConnection` if the id is not
    /// configured.
    async fn fetch_databases(&self, connection_id: &str) -> CatalogResult<BTreeSet<String>>;

    /// Fetch the table schema of one database
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DatabaseNotFound` if the database does not
    /// exist, `CatalogError::QueryFailed`/`QueryTimeout` on cluster-side
    /// failures.
    async fn fetch_schema(&self, connection_id: &str, database: &str) -> CatalogResult<Schema>;
}
