// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Rewriter
//!
//! Turns resolved candidates into text replacements and applies them in
//! one pass. Replacements are applied from the highest offset down, so a
//! length-changing splice never invalidates the span of a replacement
//! that has not been applied yet.

use std::collections::HashMap;

use kusto_qualify_catalog::normalize_cluster_name;
use kusto_qualify_context::Candidate;
use serde::Serialize;

use crate::location::ResolutionLocation;

/// One span of the original text and the text that replaces it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    /// Byte offset of the first replaced character
    pub start: usize,

    /// Byte offset one past the last replaced character
    pub end: usize,

    /// Replacement text
    pub text: String,
}

/// Format the fully-qualified reference literal for a table at a location.
///
/// The cluster argument is the normalized short name; the table keeps the
/// casing it had in the source. Normalized hosts and configured database
/// names never contain `'`, so no escaping is needed.
///
/// # Examples
///
/// ```rust
/// use kusto_qualify_resolver::{ResolutionLocation, qualified_reference};
///
/// let location = ResolutionLocation::new("https://contoso.kusto.windows.net", "Prod");
/// assert_eq!(
///     qualified_reference(&location, "Events"),
///     "cluster('contoso').database('Prod').Events"
/// );
/// ```
pub fn qualified_reference(location: &ResolutionLocation, table: &str) -> String {
    format!(
        "cluster('{}').database('{}').{}",
        normalize_cluster_name(&location.cluster_url),
        location.database,
        table
    )
}

/// Build a replacement for every candidate whose distinct name resolved
pub fn build_replacements(
    candidates: &[Candidate],
    locations: &HashMap<String, ResolutionLocation>,
) -> Vec<Replacement> {
    candidates
        .iter()
        .filter_map(|candidate| {
            locations.get(&candidate.name()).map(|location| Replacement {
                start: candidate.token.start,
                end: candidate.token.end,
                text: qualified_reference(location, &candidate.token.value),
            })
        })
        .collect()
}

/// Apply replacements by splicing from the highest offset to the lowest.
///
/// An empty replacement list returns the input verbatim, which is what
/// makes a second resolver pass over its own output a no-op.
pub fn apply_replacements(text: &str, replacements: &[Replacement]) -> String {
    if replacements.is_empty() {
        return text.to_string();
    }

    let mut ordered: Vec<&Replacement> = replacements.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start));

    let mut output = text.to_string();
    for replacement in ordered {
        output.replace_range(replacement.start..replacement.end, &replacement.text);
    }
    output
}
