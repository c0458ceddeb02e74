// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Qualify engine and per-buffer sessions
//!
//! [`QualifyEngine`] owns the shared collaborators (cache, registry,
//! schema service) and runs the pipeline over a piece of text.
//! [`DocumentSession`] wraps an engine for one buffer and enforces the
//! non-reentrancy rule: a second invocation while one is in flight is
//! silently rejected rather than queued, so two cascades never race to
//! populate the same cache entries or produce conflicting edits.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use kusto_qualify_catalog::{ConnectionRegistry, DataSourceIdentity, SchemaCache, SchemaService};
use kusto_qualify_context::filter_candidates;
use kusto_qualify_lexer::tokenize;

use crate::buffer::TextBuffer;
use crate::cascade::ResolutionCascade;
use crate::error::{QualifyError, QualifyResult};
use crate::rewrite::{apply_replacements, build_replacements};

/// A successfully rewritten query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedQuery {
    /// The rewritten text
    pub text: String,

    /// How many references were qualified
    pub replacements: usize,
}

/// What one invocation did to the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifyOutcome {
    /// References were qualified and the buffer was rewritten
    Rewritten {
        /// Number of references qualified
        replacements: usize,
    },

    /// Nothing to do: no eligible candidates, or none resolved
    Unchanged,

    /// Another invocation for this buffer is still running; this one was
    /// dropped
    InFlight,
}

/// The resolver pipeline over shared collaborators.
///
/// One engine serves any number of sessions; the cache is shared so a
/// fetch triggered by one buffer benefits all others.
pub struct QualifyEngine {
    cache: Arc<SchemaCache>,
    registry: Arc<dyn ConnectionRegistry>,
    schemas: Arc<dyn SchemaService>,
}

impl QualifyEngine {
    /// Create an engine over the given collaborators
    pub fn new(
        cache: Arc<SchemaCache>,
        registry: Arc<dyn ConnectionRegistry>,
        schemas: Arc<dyn SchemaService>,
    ) -> Self {
        Self {
            cache,
            registry,
            schemas,
        }
    }

    /// The shared schema cache
    pub fn cache(&self) -> &Arc<SchemaCache> {
        &self.cache
    }

    /// Run the full pipeline over `text` against the active data source.
    ///
    /// Returns `Ok(None)` when the text comes back unchanged (no eligible
    /// candidates, or none resolved).
    ///
    /// # Errors
    ///
    /// Returns the [`QualifyError`] preconditions: the active connection
    /// must exist in the registry and the active database's schema must
    /// already be loaded. These are checked before the cascade runs;
    /// proceeding without them would silently produce a degenerate
    /// resolution.
    pub async fn qualify_text(
        &self,
        text: &str,
        source: &DataSourceIdentity,
    ) -> QualifyResult<Option<QualifiedQuery>> {
        if self.registry.connection(&source.connection_id).is_none() {
            return Err(QualifyError::UnknownConnection(source.connection_id.clone()));
        }
        if self.cache.schema(source).await.is_none() {
            return Err(QualifyError::SchemaNotLoaded {
                connection_id: source.connection_id.clone(),
                database: source.database.clone(),
            });
        }

        let tokens = tokenize(text);
        let candidates = filter_candidates(text, &tokens);
        if candidates.is_empty() {
            tracing::debug!("no eligible candidates");
            return Ok(None);
        }

        let names = candidates.iter().map(|c| c.name()).collect();
        let cascade =
            ResolutionCascade::new(&self.cache, self.registry.as_ref(), self.schemas.as_ref());
        let locations = cascade.resolve(&names, source).await;

        let replacements = build_replacements(&candidates, &locations);
        tracing::info!(
            candidates = candidates.len(),
            distinct = names.len(),
            resolved = locations.len(),
            replacements = replacements.len(),
            "resolution finished"
        );
        if replacements.is_empty() {
            return Ok(None);
        }

        let rewritten = apply_replacements(text, &replacements);
        if rewritten == text {
            return Ok(None);
        }
        Ok(Some(QualifiedQuery {
            text: rewritten,
            replacements: replacements.len(),
        }))
    }
}

/// Resets the in-flight flag when an invocation ends, on every exit path
struct InFlightReset<'a>(&'a AtomicBool);

impl Drop for InFlightReset<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// One buffer's handle onto the engine.
///
/// The host creates one session per editor/buffer and calls
/// [`DocumentSession::qualify`] on user action.
pub struct DocumentSession {
    engine: Arc<QualifyEngine>,
    in_flight: AtomicBool,
}

impl DocumentSession {
    /// Create a session over a shared engine
    pub fn new(engine: Arc<QualifyEngine>) -> Self {
        Self {
            engine,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Qualify every resolvable table reference in the buffer.
    ///
    /// Reads the buffer once, runs the pipeline, and writes the result
    /// back through a single `replace_all` only when something changed.
    /// A reentrant call while a previous one is still running returns
    /// [`QualifyOutcome::InFlight`] without touching the buffer.
    ///
    /// # Errors
    ///
    /// [`QualifyError::NoActiveDataSource`] when `source` is `None`, plus
    /// the engine's precondition errors.
    pub async fn qualify(
        &self,
        buffer: &mut dyn TextBuffer,
        source: Option<&DataSourceIdentity>,
    ) -> QualifyResult<QualifyOutcome> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("invocation already in flight; ignoring");
            return Ok(QualifyOutcome::InFlight);
        }
        let _reset = InFlightReset(&self.in_flight);

        let source = source.ok_or(QualifyError::NoActiveDataSource)?;
        let text = buffer.text();

        match self.engine.qualify_text(&text, source).await? {
            Some(qualified) => {
                let replacements = qualified.replacements;
                buffer.replace_all(qualified.text);
                Ok(QualifyOutcome::Rewritten { replacements })
            }
            None => Ok(QualifyOutcome::Unchanged),
        }
    }
}
