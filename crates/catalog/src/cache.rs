// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema cache
//!
//! Process-lifetime, in-memory storage of fetched schemas and database
//! lists. One cache instance is shared (via `Arc`) by every resolver
//! session so a fetch triggered for one buffer benefits all others.
//!
//! There is no eviction. Entries are removed only through the explicit
//! `invalidate_*` operations, which the host calls when the user switches
//! the active connection or database or requests a refresh. All other
//! writes add entries without mutating existing ones.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::metadata::{DataSourceIdentity, Schema};

/// In-memory cache of cluster metadata.
///
/// Schemas are keyed by `"{connection_id}|{database}"` (connection ids and
/// database names are configured values and never contain `|`); database
/// lists are keyed by connection id. Lookups are case-sensitive on both
/// parts; case-insensitive *table* matching is the schema's concern.
#[derive(Debug, Default)]
pub struct SchemaCache {
    schemas: RwLock<HashMap<String, Arc<Schema>>>,
    databases: RwLock<HashMap<String, BTreeSet<String>>>,
}

impl SchemaCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached schema for one data source, if any
    pub async fn schema(&self, source: &DataSourceIdentity) -> Option<Arc<Schema>> {
        self.schemas.read().await.get(&source.cache_key()).cloned()
    }

    /// Store the schema for one data source
    pub async fn put_schema(&self, source: &DataSourceIdentity, schema: Schema) {
        tracing::debug!(
            connection = %source.connection_id,
            database = %source.database,
            tables = schema.tables.len(),
            "caching schema"
        );
        self.schemas
            .write()
            .await
            .insert(source.cache_key(), Arc::new(schema));
    }

    /// The cached database list for one connection, if any
    pub async fn database_list(&self, connection_id: &str) -> Option<BTreeSet<String>> {
        self.databases.read().await.get(connection_id).cloned()
    }

    /// Store the database list for one connection
    pub async fn put_database_list(&self, connection_id: &str, databases: BTreeSet<String>) {
        tracing::debug!(
            connection = %connection_id,
            count = databases.len(),
            "caching database list"
        );
        self.databases
            .write()
            .await
            .insert(connection_id.to_string(), databases);
    }

    /// All cached schemas for one connection, in ascending database-name
    /// order
    pub async fn cached_schemas(&self, connection_id: &str) -> Vec<(String, Arc<Schema>)> {
        let prefix = format!("{connection_id}|");
        let schemas = self.schemas.read().await;
        let mut entries: Vec<(String, Arc<Schema>)> = schemas
            .iter()
            .filter_map(|(key, schema)| {
                key.strip_prefix(&prefix)
                    .map(|db| (db.to_string(), schema.clone()))
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// True when a schema is cached for this data source
    pub async fn has_schema(&self, source: &DataSourceIdentity) -> bool {
        self.schemas.read().await.contains_key(&source.cache_key())
    }

    /// Drop everything cached for one connection: its database list and
    /// every per-database schema
    pub async fn invalidate_connection(&self, connection_id: &str) {
        tracing::debug!(connection = %connection_id, "invalidating connection");
        let prefix = format!("{connection_id}|");
        self.schemas
            .write()
            .await
            .retain(|key, _| !key.starts_with(&prefix));
        self.databases.write().await.remove(connection_id);
    }

    /// Drop the cached schema of one data source
    pub async fn invalidate_database(&self, source: &DataSourceIdentity) {
        self.schemas.write().await.remove(&source.cache_key());
    }

    /// Drop the whole cache
    pub async fn clear(&self) {
        self.schemas.write().await.clear();
        self.databases.write().await.clear();
    }
}
