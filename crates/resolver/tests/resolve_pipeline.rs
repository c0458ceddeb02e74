// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! End-to-end tests of the qualify pipeline

use std::sync::Arc;

use kusto_qualify_catalog::{DataSourceIdentity, Schema, SchemaCache};
use kusto_qualify_resolver::{
    DocumentSession, QualifyEngine, QualifyOutcome, StringBuffer, TextBuffer,
};
use kusto_qualify_test_utils::{MockRegistry, MockSchemaService, QueryFixtures};

fn prod() -> DataSourceIdentity {
    DataSourceIdentity::new("contoso", "Prod")
}

fn two_cluster_registry() -> MockRegistry {
    MockRegistry::new()
        .with_connection("contoso", "https://contoso.kusto.windows.net")
        .with_connection("fabrikam", "https://fabrikam.kusto.windows.net")
}

async fn engine_with(service: MockSchemaService, prod_tables: &[&str]) -> Arc<QualifyEngine> {
    let cache = Arc::new(SchemaCache::new());
    cache
        .put_schema(&prod(), Schema::from_tables(prod_tables.iter().copied()))
        .await;
    Arc::new(QualifyEngine::new(
        cache,
        Arc::new(two_cluster_registry()),
        Arc::new(service),
    ))
}

async fn qualify(engine: &Arc<QualifyEngine>, text: &str) -> (QualifyOutcome, String) {
    let session = DocumentSession::new(engine.clone());
    let mut buffer = StringBuffer::new(text);
    let outcome = session.qualify(&mut buffer, Some(&prod())).await.unwrap();
    (outcome, buffer.text())
}

#[tokio::test]
async fn test_offset_safety_under_multiple_replacements() {
    let engine = engine_with(MockSchemaService::new(), &["Events"]).await;
    let (outcome, text) = qualify(&engine, QueryFixtures::repeated_table()).await;

    assert_eq!(outcome, QualifyOutcome::Rewritten { replacements: 2 });
    assert_eq!(
        text,
        "cluster('contoso').database('Prod').Events | union cluster('contoso').database('Prod').Events"
    );
}

#[tokio::test]
async fn test_idempotence() {
    let engine = engine_with(MockSchemaService::new(), &["Events"]).await;
    let (_, first) = qualify(&engine, QueryFixtures::repeated_table()).await;

    let (outcome, second) = qualify(&engine, &first).await;
    assert_eq!(outcome, QualifyOutcome::Unchanged);
    assert_eq!(second, first);
}

#[tokio::test]
async fn test_consistency_across_casings() {
    let engine = engine_with(MockSchemaService::new(), &["Events"]).await;
    let (_, text) = qualify(&engine, "Events | union EVENTS").await;

    // Same distinct name, same location, original casings preserved.
    assert_eq!(
        text,
        "cluster('contoso').database('Prod').Events | union cluster('contoso').database('Prod').EVENTS"
    );
}

#[tokio::test]
async fn test_let_binding_exclusion() {
    // "Foo" is in the active schema AND let-bound; the binding wins.
    let engine = engine_with(MockSchemaService::new(), &["Foo"]).await;
    let (outcome, text) = qualify(&engine, QueryFixtures::let_shadowing()).await;

    assert_eq!(outcome, QualifyOutcome::Unchanged);
    assert_eq!(text, QueryFixtures::let_shadowing());
}

#[tokio::test]
async fn test_function_call_exclusion() {
    let engine = engine_with(MockSchemaService::new(), &["MyFunc"]).await;
    let (outcome, text) = qualify(&engine, QueryFixtures::function_call()).await;

    assert_eq!(outcome, QualifyOutcome::Unchanged);
    assert_eq!(text, QueryFixtures::function_call());
}

#[tokio::test]
async fn test_already_qualified_exclusion() {
    let engine = engine_with(MockSchemaService::new(), &["Events"]).await;
    let (outcome, text) = qualify(&engine, QueryFixtures::already_qualified()).await;

    assert_eq!(outcome, QualifyOutcome::Unchanged);
    assert_eq!(text, QueryFixtures::already_qualified());
}

#[tokio::test]
async fn test_priority_current_database_over_other_cluster() {
    let cache = Arc::new(SchemaCache::new());
    cache
        .put_schema(&prod(), Schema::from_tables(["Events"]))
        .await;
    cache
        .put_schema(
            &DataSourceIdentity::new("fabrikam", "Telemetry"),
            Schema::from_tables(["Events"]),
        )
        .await;
    let engine = Arc::new(QualifyEngine::new(
        cache,
        Arc::new(two_cluster_registry()),
        Arc::new(MockSchemaService::new()),
    ));

    let (_, text) = qualify(&engine, "Events | take 1").await;
    assert_eq!(text, "cluster('contoso').database('Prod').Events | take 1");
}

#[tokio::test]
async fn test_graceful_degradation_when_every_fetch_fails() {
    let engine = engine_with(MockSchemaService::new().failing(), &[]).await;
    let (outcome, text) = qualify(&engine, QueryFixtures::single_table()).await;

    assert_eq!(outcome, QualifyOutcome::Unchanged);
    assert_eq!(text, QueryFixtures::single_table());
}

#[tokio::test]
async fn test_partial_resolution_is_applied() {
    // "Events" resolves locally; "Mystery" resolves nowhere and stays
    // unqualified. Partial qualification is a useful result, not an error.
    let engine = engine_with(MockSchemaService::new(), &["Events"]).await;
    let (outcome, text) = qualify(&engine, "Events | join Mystery on Id").await;

    assert_eq!(outcome, QualifyOutcome::Rewritten { replacements: 1 });
    assert_eq!(
        text,
        "cluster('contoso').database('Prod').Events | join Mystery on Id"
    );
}

#[tokio::test]
async fn test_cross_cluster_fetch_resolution() {
    let service = MockSchemaService::new()
        .with_databases("contoso", [])
        .with_databases("fabrikam", ["Telemetry"])
        .with_schema("fabrikam", "Telemetry", ["Traces"]);
    let engine = engine_with(service, &["Events"]).await;

    let (outcome, text) = qualify(&engine, "Events | union Traces").await;
    assert_eq!(outcome, QualifyOutcome::Rewritten { replacements: 2 });
    assert_eq!(
        text,
        "cluster('contoso').database('Prod').Events | union cluster('fabrikam').database('Telemetry').Traces"
    );
}

#[tokio::test]
async fn test_names_inside_strings_and_comments_survive() {
    let engine = engine_with(MockSchemaService::new(), &["Events", "Orders"]).await;
    let (outcome, text) = qualify(&engine, QueryFixtures::names_in_regions()).await;

    assert_eq!(outcome, QualifyOutcome::Rewritten { replacements: 1 });
    // Only the leading Events reference is code; every "Orders" sits in a
    // string or comment.
    assert_eq!(
        text,
        "cluster('contoso').database('Prod').Events | where Msg == 'Orders' // Orders\n/* Orders */ | count"
    );
}

#[tokio::test]
async fn test_shared_cache_benefits_second_buffer() {
    let service = MockSchemaService::new()
        .with_databases("contoso", ["Analytics"])
        .with_schema("contoso", "Analytics", ["Traces"]);
    let engine = engine_with(service, &["Events"]).await;

    let (_, first) = qualify(&engine, "Traces | take 1").await;
    assert_eq!(
        first,
        "cluster('contoso').database('Analytics').Traces | take 1"
    );

    // Second buffer resolves the same name from cache alone.
    let (_, second) = qualify(&engine, "Traces | count").await;
    assert_eq!(
        second,
        "cluster('contoso').database('Analytics').Traces | count"
    );
}
