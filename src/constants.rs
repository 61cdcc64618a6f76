//! Library constants.
//!
//! Centralizes magic numbers and configuration defaults for better
//! maintainability.

/// Reading session constants.
pub mod session {
    /// Default number of verses delivered per continuation batch.
    pub const DEFAULT_BATCH_LINES: u32 = 4;

    /// Initial cursor position, the id of the first corpus row.
    pub const INITIAL_POSITION: u32 = 0;
}
