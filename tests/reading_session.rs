//! Integration tests for a full reading session: corpus loading, query
//! resolution, and "read more" continuation.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::io::Write;

use verseflow::directory::KoreanDirectory;
use verseflow::error::Error;
use verseflow::reader::BibleReader;
use verseflow::store::MemoryStore;
use verseflow::types::{BookCode, Verse};

fn verse(id: u32, book: &str, chapter: u32, number: u32, text: &str) -> Verse {
    Verse {
        id,
        book: BookCode::from(book),
        chapter,
        verse: number,
        text: text.to_string(),
    }
}

/// A miniature corpus: Genesis 1:1-3 and John 3:16-17.
fn corpus() -> Vec<Verse> {
    vec![
        verse(0, "Gen", 1, 1, "태초에 하나님이 천지를 창조하시니라 "),
        verse(1, "Gen", 1, 2, "땅이 혼돈하고 공허하며 "),
        verse(2, "Gen", 1, 3, "하나님이 이르시되 빛이 있으라 "),
        verse(3, "John", 3, 16, "하나님이 세상을 이처럼 사랑하사 "),
        verse(4, "John", 3, 17, "세상을 구원하려 하심이라 "),
    ]
}

fn session() -> BibleReader<MemoryStore, KoreanDirectory> {
    BibleReader::new(MemoryStore::new(corpus()), KoreanDirectory)
}

#[test]
fn search_concatenates_the_scope_in_reading_order() {
    let mut reader = session();
    let passage = reader.search("창세기 1장 1절에서 3절").unwrap();

    let expected: String = corpus()[0..3].iter().map(|v| v.text.clone()).collect();
    assert_eq!(passage.text, expected);
    assert_eq!(passage.title, "창세기 1:1-창세기 1:3");
}

#[test]
fn search_equals_individually_fetched_verses() {
    let mut reader = session();
    let ranged = reader.search("창세기 1장 1절에서 3절").unwrap();

    let mut joined = String::new();
    for query in ["창세기 1장 1절", "창세기 1장 2절", "창세기 1장 3절"] {
        joined.push_str(&session().search(query).unwrap().text);
    }
    assert_eq!(ranged.text, joined);
}

#[test]
fn single_reference_returns_one_verse() {
    let mut reader = session();
    let passage = reader.search("요한복음 3장 16절").unwrap();
    assert_eq!(passage.text, "하나님이 세상을 이처럼 사랑하사 ");
    assert_eq!(passage.title, "요한복음 3:16-요한복음 3:16");
}

#[test]
fn reversed_scope_is_rejected_without_partial_text() {
    let mut reader = session();
    let err = reader.search("요한복음 3장에서 창세기 1장").unwrap_err();
    assert!(matches!(err, Error::NegativeSpan { .. }));

    // Failure must not corrupt the session: a valid query still works
    assert!(reader.search("창세기 1장 1절").is_ok());
}

#[test]
fn continuation_pages_past_the_initial_scope() {
    let mut reader = session();
    reader.search("창세기 1장 1절").unwrap();

    // Default batch is 4, only ids 1..=4 remain
    let more = reader.continue_reading().unwrap();
    assert!(more.starts_with("땅이"));
    assert!(!reader.has_more());
}

#[test]
fn session_over_a_json_corpus_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&corpus()).unwrap()).unwrap();

    let store = MemoryStore::load(file.path()).unwrap();
    let mut reader = BibleReader::new(store, KoreanDirectory);
    let passage = reader.search("창세기 1장 2절에서 3절").unwrap();
    assert_eq!(passage.title, "창세기 1:2-창세기 1:3");
}
