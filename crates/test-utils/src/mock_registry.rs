// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! In-memory connection registry for testing

use kusto_qualify_catalog::{Connection, ConnectionRegistry};

/// A fixed list of connections
#[derive(Debug, Clone, Default)]
pub struct MockRegistry {
    connections: Vec<Connection>,
}

impl MockRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection, builder style
    pub fn with_connection(mut self, id: &str, cluster_url: &str) -> Self {
        self.connections.push(Connection::new(id, cluster_url));
        self
    }
}

impl ConnectionRegistry for MockRegistry {
    fn connections(&self) -> Vec<Connection> {
        self.connections.clone()
    }
}
