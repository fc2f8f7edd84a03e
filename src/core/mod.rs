//! Core domain types for the word game
//!
//! Words, word lists and feedback patterns. Everything here is pure and
//! free of I/O.

mod pattern;
mod word;
mod word_list;

pub use pattern::{LetterStatus, Pattern};
pub use word::{WORD_LEN, Word, WordError};
pub use word_list::WordList;
