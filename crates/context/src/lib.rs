// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Kusto Qualify - Context Layer
//!
//! This crate decides which lexed identifiers are eligible to be resolved
//! as unqualified table references.
//!
//! ## Classification Rules
//!
//! A token is NOT a candidate when any of the following holds:
//!
//! - Its exact value was bound by a `let <name> = ...` statement anywhere
//!   in the text (a let-bound name denotes a computed value, not a table;
//!   bindings are case-sensitive)
//! - The nearest preceding non-space character is `.` (the reference is
//!   already qualified)
//! - The nearest following non-space character is `(` (the name is a
//!   function or tabular-function call)
//!
//! Everything else is a [`Candidate`]. Candidates sharing the same
//! case-insensitive value form one distinct name and must resolve to the
//! same location downstream.
//!
//! ## Whitespace caveat
//!
//! The `.`/`(` adjacency checks skip literal space characters only; a tab
//! or newline between a token and the punctuation breaks the adjacency.
//! This exact rule is kept for compatibility: generalizing it to any
//! whitespace would reclassify identifiers in existing queries and change
//! resolver output.

pub mod candidates;

// Re-exports
pub use candidates::{Candidate, collect_let_bindings, filter_candidates};
