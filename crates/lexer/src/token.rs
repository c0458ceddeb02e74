// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Token type
//!
//! One identifier occurrence in the original query text.

use serde::Serialize;

/// An identifier token with its half-open byte span `[start, end)` into the
/// original text.
///
/// Tokens are produced in left-to-right order and never overlap, regardless
/// of string or comment content between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The identifier text exactly as written
    pub value: String,

    /// Byte offset of the first character
    pub start: usize,

    /// Byte offset one past the last character
    pub end: usize,
}

impl Token {
    /// Create a token from a value and its starting offset
    pub fn new(value: impl Into<String>, start: usize) -> Self {
        let value = value.into();
        let end = start + value.len();
        Self { value, start, end }
    }

    /// The token's value lowered for case-insensitive grouping
    pub fn normalized(&self) -> String {
        self.value.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_span_is_half_open() {
        let token = Token::new("Events", 4);
        assert_eq!(token.start, 4);
        assert_eq!(token.end, 10);
    }

    #[test]
    fn test_normalized_lowers_ascii() {
        let token = Token::new("StormEvents", 0);
        assert_eq!(token.normalized(), "stormevents");
    }
}
