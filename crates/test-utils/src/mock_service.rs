// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock schema service for testing
//!
//! Provides a programmable in-memory service with builder-pattern setup,
//! per-call recording and failure injection. The recording is what lets
//! cascade tests assert the early-stop property: not just that names were
//! resolved, but that no superfluous fetch was issued along the way.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use kusto_qualify_catalog::{CatalogError, CatalogResult, Schema, SchemaService};

/// Programmable in-memory schema service
#[derive(Debug, Default)]
pub struct MockSchemaService {
    databases: HashMap<String, BTreeSet<String>>,
    schemas: HashMap<(String, String), Schema>,
    fail_all: bool,
    database_fetches: AtomicUsize,
    schema_fetches: AtomicUsize,
    fetch_log: Mutex<Vec<String>>,
}

impl MockSchemaService {
    /// Create an empty service
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the database list of a connection
    pub fn with_databases<const N: usize>(mut self, connection_id: &str, names: [&str; N]) -> Self {
        self.databases.insert(
            connection_id.to_string(),
            names.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Declare the tables of one database
    pub fn with_schema<const N: usize>(
        mut self,
        connection_id: &str,
        database: &str,
        tables: [&str; N],
    ) -> Self {
        self.schemas.insert(
            (connection_id.to_string(), database.to_string()),
            Schema::from_tables(tables),
        );
        self
    }

    /// Make every fetch fail with a connection error
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Number of `fetch_databases` calls issued so far
    pub fn database_fetch_count(&self) -> usize {
        self.database_fetches.load(Ordering::SeqCst)
    }

    /// Number of `fetch_schema` calls issued so far
    pub fn schema_fetch_count(&self) -> usize {
        self.schema_fetches.load(Ordering::SeqCst)
    }

    /// Every fetch issued, in order, as `"databases:<conn>"` or
    /// `"schema:<conn>/<db>"`
    pub fn fetch_log(&self) -> Vec<String> {
        self.fetch_log.lock().expect("fetch log poisoned").clone()
    }

    fn record(&self, entry: String) {
        self.fetch_log.lock().expect("fetch log poisoned").push(entry);
    }
}

#[async_trait::async_trait]
impl SchemaService for MockSchemaService {
    async fn fetch_databases(&self, connection_id: &str) -> CatalogResult<BTreeSet<String>> {
        self.database_fetches.fetch_add(1, Ordering::SeqCst);
        self.record(format!("databases:{connection_id}"));

        if self.fail_all {
            return Err(CatalogError::ConnectionFailed("mock failure".to_string()));
        }
        self.databases
            .get(connection_id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownConnection(connection_id.to_string()))
    }

    async fn fetch_schema(&self, connection_id: &str, database: &str) -> CatalogResult<Schema> {
        self.schema_fetches.fetch_add(1, Ordering::SeqCst);
        self.record(format!("schema:{connection_id}/{database}"));

        if self.fail_all {
            return Err(CatalogError::ConnectionFailed("mock failure".to_string()));
        }
        self.schemas
            .get(&(connection_id.to_string(), database.to_string()))
            .cloned()
            .ok_or_else(|| {
                CatalogError::DatabaseNotFound(connection_id.to_string(), database.to_string())
            })
    }
}
