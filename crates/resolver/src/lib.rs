// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Kusto Qualify - Resolver
//!
//! This crate turns unqualified table references in Kusto query text into
//! fully-qualified `cluster('...').database('...').Table` references.
//!
//! ## Overview
//!
//! The pipeline runs once per user action on one text buffer:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            Text buffer (host)            │
//! └───────────────┬──────────────────────────┘
//!                 │ getText
//!                 ↓
//! ┌──────────────┐   ┌─────────────────────┐
//! │    Lexer     │ → │  Candidate filter   │
//! └──────────────┘   └──────────┬──────────┘
//!                               │ distinct names
//!                               ↓
//! ┌──────────────────────────────────────────┐
//! │    Resolution cascade (5 tiers)          │
//! │    cache first, sequential fetches       │
//! └──────────────┬───────────────────────────┘
//!                │ locations
//!                ↓
//! ┌──────────────┐   single replaceAll
//! │   Rewriter   │ ────────────────────────→ buffer
//! └──────────────┘
//! ```
//!
//! Resolution prefers the user's current context: the active database
//! first, then other databases on the active cluster, then every other
//! configured cluster, exhausting cached schemas before issuing any
//! network fetch. Fetches are sequential so the cascade can stop the
//! moment the last name resolves.
//!
//! ## Error model
//!
//! Fetch failures are silent (treated as empty results); names that
//! survive every tier are simply left unqualified. The only surfaced
//! errors are the preconditions in [`QualifyError`]: no active data
//! source, an unknown connection id, or an active database whose schema
//! was never loaded.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use kusto_qualify_catalog::{DataSourceIdentity, SchemaCache};
//! use kusto_qualify_resolver::{DocumentSession, QualifyEngine, StringBuffer};
//!
//! let engine = Arc::new(QualifyEngine::new(cache, registry, schemas));
//! let session = DocumentSession::new(engine);
//!
//! let mut buffer = StringBuffer::new("Events | take 10");
//! let source = DataSourceIdentity::new("contoso", "Prod");
//! session.qualify(&mut buffer, Some(&source)).await?;
//! ```

pub mod buffer;
pub mod cascade;
pub mod config;
pub mod engine;
pub mod error;
pub mod location;
pub mod rewrite;

// Re-exports
pub use buffer::{StringBuffer, TextBuffer};
pub use cascade::ResolutionCascade;
pub use config::{SchemaConfig, WorkspaceConfig};
pub use engine::{DocumentSession, QualifiedQuery, QualifyEngine, QualifyOutcome};
pub use error::{QualifyError, QualifyResult};
pub use location::ResolutionLocation;
pub use rewrite::{Replacement, apply_replacements, build_replacements, qualified_reference};
