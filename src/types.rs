//! Core type definitions for compile-time safety.
//!
//! This module provides the verse row type and a newtype wrapper around
//! store-level book identifiers to prevent accidental mixing of raw strings
//! and codes at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-level book identifier (e.g., `"Gen"`, `"Exod"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookCode(pub String);

impl BookCode {
    /// Create a new `BookCode` from a string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BookCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One verse row of the corpus.
///
/// Rows are read-only to this crate. The `id` is unique across the entire
/// corpus, assigned in canonical reading order with no gaps, so any
/// contiguous passage is exactly an inclusive id range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Corpus-wide sequential id.
    pub id: u32,
    /// Book the row belongs to.
    pub book: BookCode,
    /// Chapter number within the book.
    pub chapter: u32,
    /// Verse number within the chapter.
    pub verse: u32,
    /// Verse text as authored, trailing whitespace/punctuation included.
    pub text: String,
}
