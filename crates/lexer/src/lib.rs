// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Kusto Qualify - Lexer
//!
//! This crate scans raw Kusto query text into identifier tokens.
//!
//! ## Overview
//!
//! The resolver only needs to know two things about a span of characters:
//! whether it forms an identifier, and whether it sits inside a string or
//! comment region. A grammar-aware parse would add nothing but coupling to
//! the full query language, so the lexer is a single-pass character scanner
//! with explicit region tracking:
//!
//! - Single-quoted strings, including the `''` escape
//! - `//` line comments
//! - `/* */` block comments
//!
//! Characters inside any of these regions produce no tokens. Unterminated
//! strings and comments are tolerated: the remainder of the text is treated
//! as part of the open region and the scan finishes without error.
//!
//! ## Example
//!
//! ```rust
//! use kusto_qualify_lexer::tokenize;
//!
//! let tokens = tokenize("Events | take 10 // trailing comment");
//! let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
//! assert_eq!(values, ["Events", "take"]);
//! ```

pub mod scanner;
pub mod token;

// Re-exports
pub use scanner::tokenize;
pub use token::Token;
