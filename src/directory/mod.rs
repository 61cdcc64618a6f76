//! Book directory: human-readable Korean book names to store book codes.

use crate::error::{Error, Result};
use crate::types::BookCode;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Lookup from a human-readable book name to its store code.
pub trait BookDirectory {
    /// Resolve a book name to its code.
    ///
    /// # Errors
    /// `Error::UnknownBook` if the name is not in the directory.
    fn book_code(&self, name: &str) -> Result<BookCode>;
}

lazy_static! {
    /// Korean book name → OSIS-style book code
    static ref KOREAN_BOOKS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
    // Old Testament
    m.insert("창세기", "Gen");
    m.insert("출애굽기", "Exod");
    m.insert("레위기", "Lev");
    m.insert("민수기", "Num");
    m.insert("신명기", "Deut");
    m.insert("여호수아", "Josh");
    m.insert("사사기", "Judg");
    m.insert("룻기", "Ruth");
    m.insert("사무엘상", "1Sam");
    m.insert("사무엘하", "2Sam");
    m.insert("열왕기상", "1Kgs");
    m.insert("열왕기하", "2Kgs");
    m.insert("역대상", "1Chr");
    m.insert("역대하", "2Chr");
    m.insert("에스라", "Ezra");
    m.insert("느헤미야", "Neh");
    m.insert("에스더", "Esth");
    m.insert("욥기", "Job");
    m.insert("시편", "Ps");
    m.insert("잠언", "Prov");
    m.insert("전도서", "Eccl");
    m.insert("아가", "Song");
    m.insert("이사야", "Isa");
    m.insert("예레미야", "Jer");
    m.insert("예레미야 애가", "Lam");
    m.insert("에스겔", "Ezek");
    m.insert("다니엘", "Dan");
    m.insert("호세아", "Hos");
    m.insert("요엘", "Joel");
    m.insert("아모스", "Amos");
    m.insert("오바댜", "Obad");
    m.insert("요나", "Jonah");
    m.insert("미가", "Mic");
    m.insert("나훔", "Nah");
    m.insert("하박국", "Hab");
    m.insert("스바냐", "Zeph");
    m.insert("학개", "Hag");
    m.insert("스가랴", "Zech");
    m.insert("말라기", "Mal");
    // New Testament
    m.insert("마태복음", "Matt");
    m.insert("마가복음", "Mark");
    m.insert("누가복음", "Luke");
    m.insert("요한복음", "John");
    m.insert("사도행전", "Acts");
    m.insert("로마서", "Rom");
    m.insert("고린도전서", "1Cor");
    m.insert("고린도후서", "2Cor");
    m.insert("갈라디아서", "Gal");
    m.insert("에베소서", "Eph");
    m.insert("빌립보서", "Phil");
    m.insert("골로새서", "Col");
    m.insert("데살로니가전서", "1Thess");
    m.insert("데살로니가후서", "2Thess");
    m.insert("디모데전서", "1Tim");
    m.insert("디모데후서", "2Tim");
    m.insert("디도서", "Titus");
    m.insert("빌레몬서", "Phlm");
    m.insert("히브리서", "Heb");
    m.insert("야고보서", "Jas");
    m.insert("베드로전서", "1Pet");
    m.insert("베드로후서", "2Pet");
    m.insert("요한1서", "1John");
    m.insert("요한2서", "2John");
    m.insert("요한3서", "3John");
    m.insert("유다서", "Jude");
    m.insert("요한계시록", "Rev");
        m
    };
}

/// Directory over the fixed Korean book-name table.
#[derive(Debug, Default, Clone, Copy)]
pub struct KoreanDirectory;

impl KoreanDirectory {
    /// Reverse lookup: a store code back to its Korean book name.
    pub fn book_name(code: &BookCode) -> Option<&'static str> {
        KOREAN_BOOKS
            .iter()
            .find_map(|(&name, &c)| (c == code.as_str()).then_some(name))
    }
}

impl BookDirectory for KoreanDirectory {
    fn book_code(&self, name: &str) -> Result<BookCode> {
        KOREAN_BOOKS
            .get(name)
            .map(|&code| BookCode::from(code))
            .ok_or_else(|| Error::unknown_book(name))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn lookup_known_books() {
        let dir = KoreanDirectory;
        assert_eq!(dir.book_code("창세기").unwrap(), BookCode::from("Gen"));
        assert_eq!(dir.book_code("요한계시록").unwrap(), BookCode::from("Rev"));
        assert_eq!(dir.book_code("예레미야 애가").unwrap(), BookCode::from("Lam"));
    }

    #[test]
    fn lookup_unknown_book_fails() {
        let dir = KoreanDirectory;
        assert!(matches!(
            dir.book_code("아무도모르는책"),
            Err(Error::UnknownBook { .. })
        ));
    }

    #[test]
    fn directory_covers_all_sixty_six_books() {
        assert_eq!(KOREAN_BOOKS.len(), 66);
    }

    #[test]
    fn reverse_lookup_round_trips() {
        let dir = KoreanDirectory;
        let code = dir.book_code("시편").unwrap();
        assert_eq!(KoreanDirectory::book_name(&code), Some("시편"));
    }
}
