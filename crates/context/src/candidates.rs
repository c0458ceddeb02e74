// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Candidate filtering
//!
//! Two passes over the token list: collect `let`-bound names, then keep
//! every token that is neither bound, already qualified, nor a call.

use std::collections::HashSet;

use kusto_qualify_lexer::Token;
use serde::Serialize;

/// A token classified as eligible to represent an unqualified table name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// The underlying identifier token
    pub token: Token,
}

impl Candidate {
    /// The distinct candidate name: the token value lowered for
    /// case-insensitive grouping
    pub fn name(&self) -> String {
        self.token.normalized()
    }
}

/// Collect every name bound by a `let <name> = ...` statement.
///
/// The `let` keyword is matched case-insensitively; the bound name is
/// recorded with its exact spelling, since bindings are case-sensitive in
/// the query language. A `let` whose following token is not trailed by `=`
/// (first non-whitespace character) binds nothing.
pub fn collect_let_bindings(text: &str, tokens: &[Token]) -> HashSet<String> {
    let mut bound = HashSet::new();

    for (i, token) in tokens.iter().enumerate() {
        if !token.value.eq_ignore_ascii_case("let") {
            continue;
        }
        if let Some(name) = tokens.get(i + 1)
            && first_non_whitespace_after(text, name.end) == Some('=')
        {
            bound.insert(name.value.clone());
        }
    }

    tracing::trace!(count = bound.len(), "collected let bindings");
    bound
}

/// Classify tokens into the candidate subset.
///
/// # Examples
///
/// ```rust
/// use kusto_qualify_context::filter_candidates;
/// use kusto_qualify_lexer::tokenize;
///
/// let text = "let Limit = 10;\nEvents | take Limit";
/// let tokens = tokenize(text);
/// let names: Vec<String> = filter_candidates(text, &tokens)
///     .iter()
///     .map(|c| c.token.value.clone())
///     .collect();
/// // "Limit" is let-bound; "let" and "take" survive but resolve to nothing.
/// assert_eq!(names, ["let", "Events", "take"]);
/// ```
pub fn filter_candidates(text: &str, tokens: &[Token]) -> Vec<Candidate> {
    let bound = collect_let_bindings(text, tokens);

    tokens
        .iter()
        .filter(|token| !bound.contains(&token.value))
        .filter(|token| !is_qualified(text, token))
        .filter(|token| !is_call(text, token))
        .map(|token| Candidate {
            token: token.clone(),
        })
        .collect()
}

/// True when the nearest preceding non-space character is `.`.
///
/// Only literal spaces are skipped; a tab or newline breaks adjacency.
fn is_qualified(text: &str, token: &Token) -> bool {
    text[..token.start]
        .chars()
        .rev()
        .find(|&c| c != ' ')
        .is_some_and(|c| c == '.')
}

/// True when the nearest following non-space character is `(`.
///
/// Only literal spaces are skipped; a tab or newline breaks adjacency.
fn is_call(text: &str, token: &Token) -> bool {
    text[token.end..]
        .chars()
        .find(|&c| c != ' ')
        .is_some_and(|c| c == '(')
}

/// First non-whitespace character at or after `pos`
fn first_non_whitespace_after(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().find(|c| !c.is_whitespace())
}
