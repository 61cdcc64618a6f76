//! Batch cursor over the sequential verse-id space.

use crate::constants::session::{DEFAULT_BATCH_LINES, INITIAL_POSITION};
use crate::store::VerseStore;
use crate::types::Verse;

/// Position plus batch size for one reading session.
///
/// The cursor is plain session state with no store of its own: store access
/// is injected per call, and one cursor belongs to exactly one logical
/// reading session. It never terminates and may be reused indefinitely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCursor {
    position: u32,
    batch: u32,
}

impl Default for BatchCursor {
    fn default() -> Self {
        Self {
            position: INITIAL_POSITION,
            batch: DEFAULT_BATCH_LINES,
        }
    }
}

impl BatchCursor {
    /// Create a cursor with the given batch size, positioned at the first id.
    pub const fn with_batch(batch: u32) -> Self {
        Self {
            position: INITIAL_POSITION,
            batch,
        }
    }

    /// Current position in the id space.
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Current batch size.
    pub const fn batch(&self) -> u32 {
        self.batch
    }

    /// Move the cursor to an absolute id position. Chainable; applies to the
    /// following `next` call.
    pub fn set_cursor(&mut self, position: u32) -> &mut Self {
        self.position = position;
        self
    }

    /// Change the number of rows the following `next` call delivers.
    /// Chainable.
    pub fn set_batch(&mut self, batch: u32) -> &mut Self {
        self.batch = batch;
        self
    }

    /// Whether the cursor still points before the end of the corpus.
    ///
    /// This answers "is the cursor before the last row", not "is a full
    /// batch remaining": with a batch size above one the final `next` call
    /// may deliver fewer rows than the batch size.
    pub fn has_next(&self, store: &impl VerseStore) -> bool {
        self.position < store.count()
    }

    /// Deliver the next batch-sized slice of rows and advance past it.
    ///
    /// The slice covers ids `[position, position + batch - 1]` inclusive, in
    /// id order. Ids past the end of the corpus simply yield fewer rows.
    #[allow(clippy::should_implement_trait)] // Not an Iterator: needs the store argument
    pub fn next(&mut self, store: &impl VerseStore) -> Vec<Verse> {
        let first = self.position;
        let last = self.position.saturating_add(self.batch).saturating_sub(1);
        let rows = store
            .by_id_range(first, last)
            .into_iter()
            .cloned()
            .collect();
        self.position = last.saturating_add(1);
        rows
    }
}
