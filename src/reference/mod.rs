//! Scripture reference parsing: token patterns, label extraction, and
//! range-query splitting.
//!
//! A query like `"창세기 1장 1절에서 3절"` is split on the range separator
//! and each side is scanned for book/chapter/verse tokens. A side that
//! matches a token zero or multiple times contributes no information for
//! that token; missing right-hand fields are inherited from the left.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching the fixed set of Korean book-name literals.
///
/// `예레미야 애가` is listed ahead of `예레미야` so the longer literal wins.
#[allow(clippy::expect_used)]
static RE_BOOK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "창세기|출애굽기|레위기|민수기|신명기|여호수아|사사기|룻기|사무엘상|사무엘하\
         |열왕기상|열왕기하|역대상|역대하|에스라|느헤미야|에스더|욥기|시편|잠언\
         |전도서|아가|이사야|예레미야 애가|예레미야|에스겔|다니엘|호세아|요엘|아모스\
         |오바댜|요나|미가|나훔|하박국|스바냐|학개|스가랴|말라기|마태복음\
         |마가복음|누가복음|요한복음|사도행전|로마서|고린도전서|고린도후서|갈라디아서|에베소서|빌립보서\
         |골로새서|데살로니가전서|데살로니가후서|디모데전서|디모데후서|디도서|빌레몬서|히브리서|야고보서|베드로전서\
         |베드로후서|요한1서|요한2서|요한3서|유다서|요한계시록",
    )
    .expect("valid regex: RE_BOOK")
});

/// Regex matching chapter tokens like `3장`.
#[allow(clippy::expect_used)]
static RE_CHAPTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+장").expect("valid regex: RE_CHAPTER")
});

/// Regex matching verse tokens like `16절`.
#[allow(clippy::expect_used)]
static RE_VERSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+절").expect("valid regex: RE_VERSE")
});

/// Regex matching the range separator (`에서` / `부터`).
#[allow(clippy::expect_used)]
static RE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("에서|부터").expect("valid regex: RE_SEPARATOR")
});

/// Book/chapter/verse tokens recovered from one side of a query.
///
/// Fields hold the raw matched token text: chapter and verse tokens keep
/// their trailing unit marker (`장`/`절`) until boundary resolution strips
/// it for numeric comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialLabel {
    /// Book-name literal, if exactly one was found.
    pub book: Option<String>,
    /// Chapter token (e.g. `"3장"`), if exactly one was found.
    pub chapter: Option<String>,
    /// Verse token (e.g. `"16절"`), if exactly one was found.
    pub verse: Option<String>,
}

/// Find a keyword in a fragment, requiring exactly one occurrence.
///
/// Zero or multiple matches mean the fragment carries no usable information
/// for the token category; ambiguity is resolved later by inheritance or by
/// an empty filter at boundary resolution.
fn find_keyword(regex: &Regex, fragment: &str) -> Option<String> {
    let mut found = regex.find_iter(fragment);
    let first = found.next()?;
    if found.next().is_some() {
        return None;
    }
    Some(first.as_str().to_string())
}

/// Extract a partial label from one query fragment.
pub fn extract(fragment: &str) -> PartialLabel {
    PartialLabel {
        book: find_keyword(&RE_BOOK, fragment),
        chapter: find_keyword(&RE_CHAPTER, fragment),
        verse: find_keyword(&RE_VERSE, fragment),
    }
}

/// Split a query into its left fragment and optional right fragment.
///
/// Only the first separator occurrence splits; any further separators stay
/// inside the right fragment. With no separator the whole query is the left
/// fragment.
pub fn split(query: &str) -> (&str, Option<&str>) {
    let mut parts = RE_SEPARATOR.splitn(query, 2);
    let left = parts.next().unwrap_or(query);
    (left, parts.next())
}

/// Build the (start, end) label pair for a split query.
///
/// The end label is extracted from the right fragment and then completed by
/// context inheritance. An absent right fragment yields a single-point
/// reference with end equal to start.
pub fn resolve(left: &str, right: Option<&str>) -> (PartialLabel, PartialLabel) {
    let start = extract(left);
    let end = right.map_or_else(|| start.clone(), |fragment| inherit(&start, extract(fragment)));
    (start, end)
}

/// Copy start-label fields into absent end-label fields in {book, chapter,
/// verse} order, stopping at the first field the end label specified itself.
///
/// Models "1장 1절에서 5절": the reader implicitly keeps book and chapter
/// for the right side while the verse stays explicit.
fn inherit(start: &PartialLabel, mut end: PartialLabel) -> PartialLabel {
    if end.book.is_some() {
        return end;
    }
    end.book = start.book.clone();
    if end.chapter.is_some() {
        return end;
    }
    end.chapter = start.chapter.clone();
    if end.verse.is_some() {
        return end;
    }
    end.verse = start.verse.clone();
    end
}

/// Numeric value of a chapter/verse token with its trailing unit marker
/// stripped.
pub fn token_number(token: &str) -> Option<u32> {
    token
        .strip_suffix('장')
        .or_else(|| token.strip_suffix('절'))
        .unwrap_or(token)
        .parse()
        .ok()
}
