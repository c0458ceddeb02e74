// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Text buffer boundary
//!
//! The resolver edits whatever surface the host puts behind this trait:
//! an editor document, a notebook cell, or a plain string.

/// One editable text buffer.
///
/// The resolver reads the whole text once per invocation and, when
/// anything resolved, writes the whole text back exactly once through
/// `replace_all`. Hosts should apply that write as a single atomic,
/// undo-able edit.
pub trait TextBuffer: Send {
    /// The buffer's full current text
    fn text(&self) -> String;

    /// Replace the buffer's entire content in one edit
    fn replace_all(&mut self, new_text: String);
}

/// A plain in-memory buffer, for hosts without an editor surface (and for
/// tests)
#[derive(Debug, Clone, Default)]
pub struct StringBuffer {
    content: String,
}

impl StringBuffer {
    /// Create a buffer holding `content`
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl TextBuffer for StringBuffer {
    fn text(&self) -> String {
        self.content.clone()
    }

    fn replace_all(&mut self, new_text: String) {
        self.content = new_text;
    }
}
