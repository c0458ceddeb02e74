// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Kusto Qualify - Catalog Layer
//!
//! This crate provides the cluster schema abstraction for the table
//! reference resolver. It defines the service traits and cache used for:
//!
//! - **Connection Registry**: the configured cluster connections, queried
//!   synchronously from already-loaded state
//! - **Schema Service**: asynchronous fetches of database lists and table
//!   schemas from a cluster
//! - **Schema Cache**: process-lifetime, in-memory storage of fetched
//!   schemas and database lists, shared by every resolver session
//!
//! ## Architecture
//!
//! The catalog layer is responsible for:
//! - Naming data sources (`connection`, `database`) and their schemas
//! - Abstracting the network services behind async traits so tests can
//!   substitute in-memory implementations
//! - Normalizing cluster URLs into the short names used both for cascade
//!   ordering and for emitted `cluster('...')` literals
//!
//! ## Caching model
//!
//! The cache has no eviction policy. Entries live until the host
//! invalidates them, which it does when the user switches the active
//! connection or database for an editor, or explicitly refreshes. Cache
//! writes only ever add entries, so concurrent resolver sessions for
//! different buffers can share one cache without coordination beyond the
//! per-map lock.
//!
//! ## Implementing the service traits
//!
//! ```rust,ignore
//! use kusto_qualify_catalog::{CatalogResult, Schema, SchemaService};
//! use async_trait::async_trait;
//! use std::collections::BTreeSet;
//!
//! struct MyService;
//!
//! #[async_trait]
//! impl SchemaService for MyService {
//!     async fn fetch_databases(&self, connection_id: &str) -> CatalogResult<BTreeSet<String>> {
//!         // Your implementation here
//!     }
//!
//!     async fn fetch_schema(&self, connection_id: &str, database: &str) -> CatalogResult<Schema> {
//!         // Your implementation here
//!     }
//! }
//! ```

pub mod cache;
pub mod cluster;
pub mod error;
pub mod metadata;
pub mod r#trait;

// Re-exports
pub use cache::SchemaCache;
pub use cluster::normalize_cluster_name;
pub use error::{CatalogError, CatalogResult};
pub use metadata::{Connection, DataSourceIdentity, Schema};
pub use r#trait::{ConnectionRegistry, SchemaService};
