// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Workspace configuration
//!
//! Describes a set of connections and known schemas in one JSON document.
//! The `kusto-qualify` binary runs entirely from such a file: the
//! connections become the registry, the schema entries prime the cache
//! and back the fetch service, and `current` selects the active data
//! source.
//!
//! ## Example
//!
//! ```json
//! {
//!   "connections": [
//!     { "id": "contoso", "cluster_url": "https://contoso.kusto.windows.net" }
//!   ],
//!   "schemas": [
//!     { "connection_id": "contoso", "database": "Prod", "tables": ["Events"] }
//!   ],
//!   "current": { "connection_id": "contoso", "database": "Prod" }
//! }
//! ```

use std::collections::BTreeSet;

use kusto_qualify_catalog::{
    CatalogError, CatalogResult, Connection, ConnectionRegistry, DataSourceIdentity, Schema,
    SchemaCache, SchemaService,
};
use serde::{Deserialize, Serialize};

/// Tables known for one database, as configured
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Owning connection id
    pub connection_id: String,

    /// Database name
    pub database: String,

    /// Table names
    pub tables: Vec<String>,
}

/// A full offline workspace: connections, schemas, active source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Configured connections
    pub connections: Vec<Connection>,

    /// Known schemas
    #[serde(default)]
    pub schemas: Vec<SchemaConfig>,

    /// The active data source, if one is selected
    #[serde(default)]
    pub current: Option<DataSourceIdentity>,
}

impl WorkspaceConfig {
    /// Parse a workspace file
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the active data source's schema into the cache, satisfying
    /// the pipeline's loaded-schema precondition. Everything else is left
    /// to the cascade's fetch tiers.
    pub async fn prime(&self, cache: &SchemaCache) {
        let Some(current) = &self.current else {
            return;
        };
        for schema in &self.schemas {
            if schema.connection_id == current.connection_id
                && schema.database == current.database
            {
                cache
                    .put_schema(current, Schema::from_tables(schema.tables.clone()))
                    .await;
            }
        }
    }
}

impl ConnectionRegistry for WorkspaceConfig {
    fn connections(&self) -> Vec<Connection> {
        self.connections.clone()
    }
}

#[async_trait::async_trait]
impl SchemaService for WorkspaceConfig {
    async fn fetch_databases(&self, connection_id: &str) -> CatalogResult<BTreeSet<String>> {
        if !self.connections.iter().any(|c| c.id == connection_id) {
            return Err(CatalogError::UnknownConnection(connection_id.to_string()));
        }
        Ok(self
            .schemas
            .iter()
            .filter(|s| s.connection_id == connection_id)
            .map(|s| s.database.clone())
            .collect())
    }

    async fn fetch_schema(&self, connection_id: &str, database: &str) -> CatalogResult<Schema> {
        self.schemas
            .iter()
            .find(|s| s.connection_id == connection_id && s.database == database)
            .map(|s| Schema::from_tables(s.tables.clone()))
            .ok_or_else(|| {
                CatalogError::DatabaseNotFound(connection_id.to_string(), database.to_string())
            })
    }
}
