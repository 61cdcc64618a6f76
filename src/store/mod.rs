//! Verse store boundary and the in-memory default implementation.
//!
//! The core only ever reads from the store. Rows are keyed by a corpus-wide
//! sequential id following canonical reading order, so any contiguous
//! passage is an inclusive id range.

use crate::error::{Error, Result};
use crate::types::{BookCode, Verse};
use std::path::Path;

/// Read-only access to the verse corpus.
///
/// Different implementations can back this with various sources (in-memory
/// rows, a database, embedded data).
pub trait VerseStore {
    /// All rows belonging to one book, ascending by id.
    fn by_book(&self, code: &BookCode) -> Vec<&Verse>;

    /// All rows with ids in `[lo, hi]` inclusive, ascending by id.
    fn by_id_range(&self, lo: u32, hi: u32) -> Vec<&Verse>;

    /// Total number of verse rows in the corpus.
    fn count(&self) -> u32;
}

/// Narrow an already-filtered row set to one chapter.
pub fn filter_chapter<'a>(rows: &[&'a Verse], chapter: u32) -> Vec<&'a Verse> {
    rows.iter().copied().filter(|v| v.chapter == chapter).collect()
}

/// Narrow an already-filtered row set to one verse number.
pub fn filter_verse<'a>(rows: &[&'a Verse], verse: u32) -> Vec<&'a Verse> {
    rows.iter().copied().filter(|v| v.verse == verse).collect()
}

/// In-memory verse corpus, rows held in ascending id order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<Verse>,
}

impl MemoryStore {
    /// Build a store from verse rows. Rows are sorted by id on entry.
    pub fn new(mut rows: Vec<Verse>) -> Self {
        rows.sort_by_key(|v| v.id);
        Self { rows }
    }

    /// Load a JSON corpus (an array of verse rows) from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs_err::read_to_string(path)
            .map_err(|e| Error::io(e, Some(path.to_path_buf())))?;

        let rows: Vec<Verse> = serde_json::from_str(&content)
            .map_err(|e| Error::parse(e.to_string(), Some(path.to_path_buf())))?;

        tracing::info!("Loaded {} verses from {}", rows.len(), path.display());
        Ok(Self::new(rows))
    }

    /// All rows, ascending by id.
    pub fn rows(&self) -> &[Verse] {
        &self.rows
    }
}

impl VerseStore for MemoryStore {
    fn by_book(&self, code: &BookCode) -> Vec<&Verse> {
        self.rows.iter().filter(|v| &v.book == code).collect()
    }

    fn by_id_range(&self, lo: u32, hi: u32) -> Vec<&Verse> {
        self.rows
            .iter()
            .filter(|v| v.id >= lo && v.id <= hi)
            .collect()
    }

    fn count(&self) -> u32 {
        u32::try_from(self.rows.len()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::io::Write;

    fn verse(id: u32, book: &str, chapter: u32, number: u32) -> Verse {
        Verse {
            id,
            book: BookCode::from(book),
            chapter,
            verse: number,
            text: format!("[{book} {chapter}:{number}] "),
        }
    }

    fn fixture() -> MemoryStore {
        MemoryStore::new(vec![
            verse(0, "Gen", 1, 1),
            verse(1, "Gen", 1, 2),
            verse(2, "Gen", 2, 1),
            verse(3, "Exod", 1, 1),
        ])
    }

    #[test]
    fn by_book_filters_and_orders() {
        let store = fixture();
        let rows = store.by_book(&BookCode::from("Gen"));
        assert_eq!(rows.len(), 3);
        assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn by_id_range_is_inclusive() {
        let store = fixture();
        let rows = store.by_id_range(1, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[1].id, 2);
    }

    #[test]
    fn chapter_and_verse_narrowing() {
        let store = fixture();
        let rows = store.by_book(&BookCode::from("Gen"));
        let ch1 = filter_chapter(&rows, 1);
        assert_eq!(ch1.len(), 2);
        let v2 = filter_verse(&ch1, 2);
        assert_eq!(v2.len(), 1);
        assert_eq!(v2[0].id, 1);
    }

    #[test]
    fn new_sorts_rows_by_id() {
        let store = MemoryStore::new(vec![verse(2, "Gen", 2, 1), verse(0, "Gen", 1, 1)]);
        assert_eq!(store.rows()[0].id, 0);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn load_reads_json_corpus() {
        let rows = vec![verse(0, "Gen", 1, 1), verse(1, "Gen", 1, 2)];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&rows).unwrap()).unwrap();

        let store = MemoryStore::load(file.path()).unwrap();
        assert_eq!(store.count(), 2);
        assert_eq!(store.rows()[1].verse, 2);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = MemoryStore::load("/nonexistent/verseflow_corpus.json");
        assert!(matches!(err, Err(Error::Io { .. })));
    }

    #[test]
    fn load_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = MemoryStore::load(file.path());
        assert!(matches!(err, Err(Error::Parse { .. })));
    }
}
