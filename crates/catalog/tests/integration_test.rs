// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for the catalog crate

use std::collections::BTreeSet;

use kusto_qualify_catalog::{
    CatalogError, CatalogResult, DataSourceIdentity, Schema, SchemaCache, SchemaService,
};

// In-memory schema service for integration testing
struct TestService;

#[async_trait::async_trait]
impl SchemaService for TestService {
    async fn fetch_databases(&self, connection_id: &str) -> CatalogResult<BTreeSet<String>> {
        match connection_id {
            "contoso" => Ok(BTreeSet::from(["Prod".to_string(), "Staging".to_string()])),
            other => Err(CatalogError::UnknownConnection(other.to_string())),
        }
    }

    async fn fetch_schema(&self, connection_id: &str, database: &str) -> CatalogResult<Schema> {
        match (connection_id, database) {
            ("contoso", "Prod") => Ok(Schema::from_tables(["StormEvents", "AuditLog"])),
            ("contoso", "Staging") => Ok(Schema::from_tables(["StormEvents"])),
            ("contoso", db) => Err(CatalogError::DatabaseNotFound(
                connection_id.to_string(),
                db.to_string(),
            )),
            (conn, _) => Err(CatalogError::UnknownConnection(conn.to_string())),
        }
    }
}

#[tokio::test]
async fn test_fetch_and_cache_schema() {
    let service = TestService;
    let cache = SchemaCache::new();
    let source = DataSourceIdentity::new("contoso", "Prod");

    let schema = service.fetch_schema("contoso", "Prod").await.unwrap();
    cache.put_schema(&source, schema).await;

    let cached = cache.schema(&source).await.unwrap();
    assert!(cached.contains_table("stormevents"));
    assert!(cached.contains_table("AUDITLOG"));
}

#[tokio::test]
async fn test_fetch_databases_populates_list_cache() {
    let service = TestService;
    let cache = SchemaCache::new();

    let databases = service.fetch_databases("contoso").await.unwrap();
    cache.put_database_list("contoso", databases).await;

    let list = cache.database_list("contoso").await.unwrap();
    assert_eq!(
        list.into_iter().collect::<Vec<_>>(),
        ["Prod".to_string(), "Staging".to_string()]
    );
}

#[tokio::test]
async fn test_unknown_connection_is_an_error_not_a_panic() {
    let service = TestService;
    let result = service.fetch_databases("missing").await;
    assert!(matches!(result, Err(CatalogError::UnknownConnection(_))));
}

#[tokio::test]
async fn test_missing_database_reports_both_parts() {
    let service = TestService;
    let err = service.fetch_schema("contoso", "Nope").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Database 'Nope' not found on connection 'contoso'"
    );
}
