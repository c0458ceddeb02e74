// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Single-pass identifier scanner
//!
//! Walks the query text once, tracking string and comment regions, and
//! collects every identifier run found in plain code. The scanner never
//! fails: malformed input degrades by treating the rest of the text as
//! part of the open region.

use crate::token::Token;

/// True for characters that may start an identifier
fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// True for characters that may continue an identifier
fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Scan query text into an ordered list of identifier tokens.
///
/// Identifiers are runs of `[A-Za-z_][A-Za-z0-9_-]*`. Content inside
/// single-quoted strings (with `''` escapes), `//` line comments and
/// `/* */` block comments is skipped entirely.
///
/// # Examples
///
/// ```rust
/// use kusto_qualify_lexer::tokenize;
///
/// let tokens = tokenize("StormEvents | where State == 'TEXAS'");
/// assert_eq!(tokens[0].value, "StormEvents");
/// assert_eq!(tokens[0].start, 0);
/// assert_eq!(tokens[0].end, 11);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];
        let next = chars.get(i + 1).map(|&(_, c)| c);

        if c == '\'' {
            i = skip_string(&chars, i + 1);
        } else if c == '/' && next == Some('/') {
            i = skip_line_comment(&chars, i + 2);
        } else if c == '/' && next == Some('*') {
            i = skip_block_comment(&chars, i + 2);
        } else if is_identifier_start(c) {
            let start = offset;
            let mut end = offset + c.len_utf8();
            i += 1;
            while let Some(&(part_offset, part)) = chars.get(i) {
                if !is_identifier_part(part) {
                    break;
                }
                end = part_offset + part.len_utf8();
                i += 1;
            }
            tokens.push(Token {
                value: text[start..end].to_string(),
                start,
                end,
            });
        } else {
            i += 1;
        }
    }

    tracing::trace!(count = tokens.len(), "scanned query text");
    tokens
}

/// Skip past a single-quoted string opened just before `i`.
///
/// A doubled quote (`''`) escapes a literal quote and keeps the string
/// open. An unterminated string swallows the rest of the text.
fn skip_string(chars: &[(usize, char)], mut i: usize) -> usize {
    while i < chars.len() {
        if chars[i].1 == '\'' {
            if chars.get(i + 1).map(|&(_, c)| c) == Some('\'') {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    chars.len()
}

/// Skip to the end of the current line
fn skip_line_comment(chars: &[(usize, char)], mut i: usize) -> usize {
    while i < chars.len() {
        if chars[i].1 == '\n' {
            return i + 1;
        }
        i += 1;
    }
    chars.len()
}

/// Skip past the closing `*/`; an unterminated block comment swallows the
/// rest of the text.
fn skip_block_comment(chars: &[(usize, char)], mut i: usize) -> usize {
    while i < chars.len() {
        if chars[i].1 == '*' && chars.get(i + 1).map(|&(_, c)| c) == Some('/') {
            return i + 2;
        }
        i += 1;
    }
    chars.len()
}
