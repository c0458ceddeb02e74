// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata types
//!
//! Value types naming clusters, data sources and their table sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One configured cluster connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Opaque connection id, unique within the registry
    pub id: String,

    /// Cluster URL as configured, e.g. `https://contoso.kusto.windows.net`
    pub cluster_url: String,
}

impl Connection {
    /// Create a connection
    pub fn new(id: impl Into<String>, cluster_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cluster_url: cluster_url.into(),
        }
    }
}

/// One database on one configured connection: the unit the resolver treats
/// as a data source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataSourceIdentity {
    /// The owning connection's id
    pub connection_id: String,

    /// Database name, case-sensitive as configured
    pub database: String,
}

impl DataSourceIdentity {
    /// Create a data source identity
    pub fn new(connection_id: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
            database: database.into(),
        }
    }

    /// Cache key for this data source's schema
    pub fn cache_key(&self) -> String {
        format!("{}|{}", self.connection_id, self.database)
    }
}

/// The set of table names known for one data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Table names with their original casing
    pub tables: BTreeSet<String>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from table names
    pub fn from_tables<I, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tables: tables.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-insensitive membership test.
    ///
    /// Table names are stored with their original casing but matched
    /// lowercase, since candidate names are grouped case-insensitively.
    pub fn contains_table(&self, name: &str) -> bool {
        let needle = name.to_ascii_lowercase();
        self.tables
            .iter()
            .any(|t| t.to_ascii_lowercase() == needle)
    }

    /// True when no tables are known
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
