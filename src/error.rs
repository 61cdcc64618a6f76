//! Library error types.
//!
//! Provides one error enum with a variant per failure cause, so callers can
//! branch on cause without matching message strings.

use thiserror::Error;

/// Library result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while resolving and reading scripture ranges
#[derive(Debug, Error)]
pub enum Error {
    /// Book name not present in the book directory
    #[error("Unknown book name: {name}")]
    UnknownBook {
        /// The name that failed directory lookup.
        name: String,
    },

    /// A boundary filter matched no verse rows
    #[error("No verse matches: {detail}")]
    NoMatch {
        /// Description of the filter that came up empty.
        detail: String,
    },

    /// Resolved end boundary precedes the start boundary
    #[error("Unacceptable scope: end verse (id {end}) precedes start verse (id {start})")]
    NegativeSpan {
        /// Sequential id of the resolved start verse.
        start: u32,
        /// Sequential id of the resolved end verse.
        end: u32,
    },

    /// Query carried no resolvable start reference
    #[error("No book reference found in query: {query:?}")]
    Reference {
        /// The offending query text.
        query: String,
    },

    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Corpus parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },
}

impl Error {
    /// Create an `UnknownBook` error
    pub fn unknown_book(name: impl Into<String>) -> Self {
        Self::UnknownBook { name: name.into() }
    }

    /// Create a `NoMatch` error with filter context
    pub fn no_match(detail: impl Into<String>) -> Self {
        Self::NoMatch { detail: detail.into() }
    }

    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }
}

// Convenience conversion
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
