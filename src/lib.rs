//! `VerseFlow` - natural-language scripture reference resolution.
//!
//! This crate parses free-form queries like `"창세기 1장 1절에서 3절"`,
//! resolves them to a contiguous range of verse rows, and supports
//! incremental "read more" continuation across a reading session.

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod cursor;
pub mod directory;
pub mod error;
pub mod reader;
pub mod reference;
pub mod store;
pub mod types;
