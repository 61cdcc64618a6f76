//! Reading sessions: boundary resolution, content assembly, and "read more"
//! continuation.
//!
//! A [`BibleReader`] is one logical reading session. `search` resolves a
//! query to an inclusive verse-id scope, fetches it in a single batch, and
//! leaves the session cursor right after the scope so `continue_reading`
//! can page onward in default-sized batches.

use crate::config::Config;
use crate::cursor::BatchCursor;
use crate::directory::BookDirectory;
use crate::error::{Error, Result};
use crate::reference::{self, PartialLabel};
use crate::store::{self, VerseStore};
use crate::types::Verse;

/// Which end of a filtered row set a boundary resolution picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// First matching row by id (range start).
    First,
    /// Last matching row by id (range end).
    Last,
}

/// A resolved passage: display title plus concatenated verse text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    /// Title like `"창세기 1:1-창세기 1:3"`.
    pub title: String,
    /// Verse texts joined in reading order with no added separator.
    pub text: String,
}

impl Passage {
    /// Format for display (title followed by the text).
    pub fn display(&self) -> String {
        format!("{}\n{}", self.title, self.text)
    }
}

/// One logical reading session over a verse store.
///
/// Owns the session cursor, so concurrent sessions never collide: create
/// one reader per logical reading interaction. Not safe for shared use
/// across threads without external synchronization — `search` mutates
/// cursor state that `continue_reading` depends on.
pub struct BibleReader<S, D> {
    verses: S,
    directory: D,
    cursor: BatchCursor,
    batch_lines: u32,
}

impl<S: VerseStore, D: BookDirectory> BibleReader<S, D> {
    /// Create a session with the default batch size.
    pub fn new(verses: S, directory: D) -> Self {
        Self::with_config(verses, directory, &Config::default())
    }

    /// Create a session configured from `config`.
    pub fn with_config(verses: S, directory: D, config: &Config) -> Self {
        Self {
            verses,
            directory,
            cursor: BatchCursor::with_batch(config.batch_lines),
            batch_lines: config.batch_lines,
        }
    }

    /// Resolve a query to its verse scope and return the passage.
    ///
    /// The session cursor ends up positioned directly after the scope, so a
    /// following `continue_reading` picks up where the passage stopped.
    pub fn search(&mut self, query: &str) -> Result<Passage> {
        let (left, right) = reference::split(query);
        let (start_label, end_label) = reference::resolve(left, right);
        tracing::debug!(?start_label, ?end_label, "parsed query labels");

        if start_label.book.is_none() {
            return Err(Error::Reference {
                query: query.to_string(),
            });
        }

        let start = self.resolve_boundary(&start_label, Bound::First)?;
        let end = self.resolve_boundary(&end_label, Bound::Last)?;
        tracing::debug!(start_id = start.id, end_id = end.id, "resolved scope");

        let text = self.assemble(&start, &end)?;
        let title = format_title(&start_label, &start, &end_label, &end);
        Ok(Passage { title, text })
    }

    /// Fetch the next default-sized batch from the current cursor position.
    ///
    /// Only meaningful after a successful `search` in this session has
    /// positioned the cursor.
    pub fn continue_reading(&mut self) -> Result<String> {
        let rows = self.cursor.next(&self.verses);
        if rows.is_empty() {
            return Err(Error::no_match("no verses remain past the current position"));
        }
        Ok(join_text(&rows))
    }

    /// Whether any verses remain past the current cursor position.
    ///
    /// Answers "before the end of the corpus", not "a full batch remains".
    pub fn has_more(&self) -> bool {
        self.cursor.has_next(&self.verses)
    }

    /// Current cursor state, for callers persisting session progress.
    pub const fn cursor(&self) -> &BatchCursor {
        &self.cursor
    }

    /// Resolve a partial label to a concrete boundary verse.
    ///
    /// The book is required; chapter and verse narrow the row set further
    /// when present, with the token's unit marker stripped for numeric
    /// comparison. `First` picks the lowest-id row, `Last` the highest, so
    /// a coarse start label snaps to the beginning of its scope and a
    /// coarse end label to the end of its scope.
    pub fn resolve_boundary(&self, label: &PartialLabel, pick: Bound) -> Result<Verse> {
        let name = label
            .book
            .as_deref()
            .ok_or_else(|| Error::no_match("label carries no book name"))?;
        let code = self.directory.book_code(name)?;

        let mut rows = self.verses.by_book(&code);
        if let Some(chapter) = label.chapter.as_deref().and_then(reference::token_number) {
            rows = store::filter_chapter(&rows, chapter);
        }
        if let Some(verse) = label.verse.as_deref().and_then(reference::token_number) {
            rows = store::filter_verse(&rows, verse);
        }

        let picked = match pick {
            Bound::First => rows.first(),
            Bound::Last => rows.last(),
        };
        picked.copied().cloned().ok_or_else(|| {
            Error::no_match(format!(
                "{name} {} {}",
                label.chapter.as_deref().unwrap_or("-"),
                label.verse.as_deref().unwrap_or("-"),
            ))
        })
    }

    /// Fetch the full scope in one batch, restoring the session batch size
    /// whether or not the fetch succeeds.
    fn assemble(&mut self, start: &Verse, end: &Verse) -> Result<String> {
        let contents = self.fetch_scope(start, end);
        self.cursor.set_batch(self.batch_lines);
        contents
    }

    fn fetch_scope(&mut self, start: &Verse, end: &Verse) -> Result<String> {
        if end.id < start.id {
            return Err(Error::NegativeSpan {
                start: start.id,
                end: end.id,
            });
        }
        let span = end.id - start.id + 1;
        let rows = self
            .cursor
            .set_cursor(start.id)
            .set_batch(span)
            .next(&self.verses);
        Ok(join_text(&rows))
    }
}

/// Concatenate verse texts with no added separator. Verse text is assumed
/// to carry its own trailing whitespace/punctuation as authored.
fn join_text(rows: &[Verse]) -> String {
    rows.iter().map(|v| v.text.as_str()).collect()
}

/// Format the passage title from the label book names and the resolved
/// boundary rows' concrete chapter/verse numbers.
fn format_title(
    start_label: &PartialLabel,
    start: &Verse,
    end_label: &PartialLabel,
    end: &Verse,
) -> String {
    let start_book = start_label.book.as_deref().unwrap_or_default();
    let end_book = end_label.book.as_deref().unwrap_or(start_book);
    format!(
        "{start_book} {}:{}-{end_book} {}:{}",
        start.chapter, start.verse, end.chapter, end.verse
    )
}
