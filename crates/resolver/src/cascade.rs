// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Resolution cascade
//!
//! Maps each distinct candidate name to the data source that owns it,
//! searching in a fixed priority order:
//!
//! 1. The active database (cached schema, no I/O)
//! 2. Other databases on the active cluster (cached, ascending db name)
//! 3. Other clusters (cached, ascending normalized cluster name)
//! 4. The active cluster, fetching uncached databases one at a time
//! 5. Other clusters, same fetch-and-retry, in tier-3 order
//!
//! The ordering exhausts everything already known before touching the
//! network, and prefers the user's current context as the most likely
//! intended source. Fetches are sequential, and the remaining-unresolved
//! set is re-checked after every individual schema fetch, so the cascade
//! stops the moment the last name resolves and never issues a fetch it
//! no longer needs.
//!
//! A fetch failure is downgraded to an empty result: the failed entry is
//! not cached, the cascade moves on, and a later invocation may retry.
//! Names that survive every tier are left unresolved; that is a normal
//! outcome, not an error.

use std::collections::{BTreeSet, HashMap};

use kusto_qualify_catalog::{
    Connection, ConnectionRegistry, DataSourceIdentity, Schema, SchemaCache, SchemaService,
    normalize_cluster_name,
};

use crate::location::ResolutionLocation;

/// The tiered candidate-name search.
///
/// Borrows its collaborators for the duration of one invocation; the
/// cache outlives it and accumulates whatever the fetch tiers learned.
pub struct ResolutionCascade<'a> {
    cache: &'a SchemaCache,
    registry: &'a dyn ConnectionRegistry,
    schemas: &'a dyn SchemaService,
}

impl<'a> ResolutionCascade<'a> {
    /// Create a cascade over the given collaborators
    pub fn new(
        cache: &'a SchemaCache,
        registry: &'a dyn ConnectionRegistry,
        schemas: &'a dyn SchemaService,
    ) -> Self {
        Self {
            cache,
            registry,
            schemas,
        }
    }

    /// Resolve a set of distinct candidate names (lowercase) against the
    /// active data source.
    ///
    /// The returned map is partial: names no tier could place are simply
    /// absent. Each resolved name maps to exactly one location, the first
    /// found under the priority order.
    pub async fn resolve(
        &self,
        names: &BTreeSet<String>,
        current: &DataSourceIdentity,
    ) -> HashMap<String, ResolutionLocation> {
        let mut resolved = HashMap::new();
        let mut unresolved = names.clone();

        let Some(current_conn) = self.registry.connection(&current.connection_id) else {
            tracing::warn!(connection = %current.connection_id, "active connection not in registry");
            return resolved;
        };
        let others = self.other_connections(&current.connection_id);

        // Tier 1: the active database's cached schema.
        if let Some(schema) = self.cache.schema(current).await {
            claim(
                &schema,
                &current_conn.cluster_url,
                &current.database,
                &mut resolved,
                &mut unresolved,
            );
        }
        tracing::debug!(tier = 1, remaining = unresolved.len(), "cascade tier done");
        if unresolved.is_empty() {
            return resolved;
        }

        // Tier 2: other cached databases on the active cluster.
        self.scan_cached(&current_conn, Some(&current.database), &mut resolved, &mut unresolved)
            .await;
        tracing::debug!(tier = 2, remaining = unresolved.len(), "cascade tier done");
        if unresolved.is_empty() {
            return resolved;
        }

        // Tier 3: cached schemas of every other cluster.
        for conn in &others {
            if unresolved.is_empty() {
                break;
            }
            self.scan_cached(conn, None, &mut resolved, &mut unresolved).await;
        }
        tracing::debug!(tier = 3, remaining = unresolved.len(), "cascade tier done");
        if unresolved.is_empty() {
            return resolved;
        }

        // Tier 4: fetch uncached databases of the active cluster, then
        // re-run the tier-2 scan to pick up anything cached meanwhile.
        self.fetch_and_retry(&current_conn, Some(&current.database), &mut resolved, &mut unresolved)
            .await;
        self.scan_cached(&current_conn, Some(&current.database), &mut resolved, &mut unresolved)
            .await;
        tracing::debug!(tier = 4, remaining = unresolved.len(), "cascade tier done");
        if unresolved.is_empty() {
            return resolved;
        }

        // Tier 5: fetch across the other clusters, in tier-3 order.
        for conn in &others {
            if unresolved.is_empty() {
                break;
            }
            self.fetch_and_retry(conn, None, &mut resolved, &mut unresolved).await;
        }
        tracing::debug!(tier = 5, remaining = unresolved.len(), "cascade tier done");

        if !unresolved.is_empty() {
            tracing::debug!(
                remaining = unresolved.len(),
                "names left unresolved after all tiers"
            );
        }
        resolved
    }

    /// Every configured connection except the active one, ordered by
    /// normalized cluster name with the connection id as tie-break.
    fn other_connections(&self, current_id: &str) -> Vec<Connection> {
        let mut others: Vec<Connection> = self
            .registry
            .connections()
            .into_iter()
            .filter(|c| c.id != current_id)
            .collect();
        others.sort_by_key(|c| (normalize_cluster_name(&c.cluster_url), c.id.clone()));
        others
    }

    /// Scan one connection's cached schemas (ascending database order),
    /// skipping `skip_database` when given.
    async fn scan_cached(
        &self,
        conn: &Connection,
        skip_database: Option<&str>,
        resolved: &mut HashMap<String, ResolutionLocation>,
        unresolved: &mut BTreeSet<String>,
    ) {
        for (database, schema) in self.cache.cached_schemas(&conn.id).await {
            if unresolved.is_empty() {
                return;
            }
            if skip_database == Some(database.as_str()) {
                continue;
            }
            claim(&schema, &conn.cluster_url, &database, resolved, unresolved);
        }
    }

    /// Fetch-and-retry over one connection: obtain its database list
    /// (cache first), then fetch each database that has no cached schema,
    /// attempting resolution after every fetch so the loop can stop early.
    async fn fetch_and_retry(
        &self,
        conn: &Connection,
        skip_database: Option<&str>,
        resolved: &mut HashMap<String, ResolutionLocation>,
        unresolved: &mut BTreeSet<String>,
    ) {
        if unresolved.is_empty() {
            return;
        }

        let databases = match self.cache.database_list(&conn.id).await {
            Some(list) => list,
            None => match self.schemas.fetch_databases(&conn.id).await {
                Ok(list) => {
                    self.cache.put_database_list(&conn.id, list.clone()).await;
                    list
                }
                Err(err) => {
                    tracing::warn!(
                        connection = %conn.id,
                        error = %err,
                        "database list fetch failed; treating as empty"
                    );
                    return;
                }
            },
        };

        for database in &databases {
            if unresolved.is_empty() {
                return;
            }
            if skip_database == Some(database.as_str()) {
                continue;
            }
            let source = DataSourceIdentity::new(&conn.id, database);
            if self.cache.has_schema(&source).await {
                // Already covered by the cached-scan tiers.
                continue;
            }

            match self.schemas.fetch_schema(&conn.id, database).await {
                Ok(schema) => {
                    self.cache.put_schema(&source, schema.clone()).await;
                    claim(&schema, &conn.cluster_url, database, resolved, unresolved);
                }
                Err(err) => {
                    tracing::warn!(
                        connection = %conn.id,
                        database = %database,
                        error = %err,
                        "schema fetch failed; treating as empty"
                    );
                }
            }
        }
    }
}

/// Move every unresolved name present in `schema` into the resolved map,
/// pointing at the given cluster and database.
fn claim(
    schema: &Schema,
    cluster_url: &str,
    database: &str,
    resolved: &mut HashMap<String, ResolutionLocation>,
    unresolved: &mut BTreeSet<String>,
) {
    let found: Vec<String> = unresolved
        .iter()
        .filter(|name| schema.contains_table(name))
        .cloned()
        .collect();

    for name in found {
        unresolved.remove(&name);
        resolved.insert(name, ResolutionLocation::new(cluster_url, database));
    }
}
