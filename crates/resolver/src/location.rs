// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Resolution locations

use serde::Serialize;

/// The data source that owns a resolved candidate name.
///
/// Stored in the resolution map keyed by the lowercase candidate name;
/// once a name has a location it is never overwritten (first-found wins
/// under the cascade's priority order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionLocation {
    /// Cluster URL as configured on the owning connection
    pub cluster_url: String,

    /// Database name with its configured casing
    pub database: String,
}

impl ResolutionLocation {
    /// Create a location
    pub fn new(cluster_url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            cluster_url: cluster_url.into(),
            database: database.into(),
        }
    }
}
