//! Library configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use crate::constants::session::DEFAULT_BATCH_LINES;
use crate::error::Result;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Configuration for a reading session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Verses delivered per "read more" batch.
    pub batch_lines: u32,
    /// Path to a JSON verse corpus, if one is configured and exists.
    pub corpus_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_lines: DEFAULT_BATCH_LINES,
            corpus_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(lines) = env::var("VERSEFLOW_BATCH_LINES") {
            if let Ok(lines) = lines.parse::<u32>() {
                if lines > 0 {
                    config.batch_lines = lines;
                }
            }
        }

        // Corpus path: env var override, or default ~/.verseflow/corpus.json
        config.corpus_path = env::var("VERSEFLOW_CORPUS").ok().map_or_else(
            || {
                dirs::home_dir()
                    .map(|h| h.join(".verseflow/corpus.json"))
                    .filter(|p| p.is_file())
            },
            |path| {
                let p = PathBuf::from(shellexpand::tilde(&path).to_string());
                p.is_file().then_some(p)
            },
        );

        Ok(config)
    }
}
