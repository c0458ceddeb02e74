// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Kusto Qualify - Test Utilities
//!
//! Shared mocks and fixtures for testing the resolver pipeline:
//!
//! - [`MockRegistry`]: an in-memory connection registry
//! - [`MockSchemaService`]: a programmable schema service with fetch
//!   counters and failure injection, so tests can assert exactly which
//!   network calls the cascade issued
//! - [`QueryFixtures`]: sample Kusto queries

pub mod fixtures;
pub mod mock_registry;
pub mod mock_service;

// Re-exports
pub use fixtures::QueryFixtures;
pub use mock_registry::MockRegistry;
pub use mock_service::MockSchemaService;
