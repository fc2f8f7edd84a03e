//! Word sources for new sessions
//!
//! Provides the default word list compiled into the binary, plus loading from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::WordList;

/// The embedded default word source as a `WordList`
#[must_use]
pub fn default_word_list() -> WordList {
    WordList::from_strs(WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid_uppercase() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn words_have_no_duplicates() {
        assert_eq!(default_word_list().len(), WORDS_COUNT);
    }

    #[test]
    fn includes_classic_starter_words() {
        let list = default_word_list();
        for word in ["REACT", "SWIFT", "SCALA", "UNITY"] {
            assert!(list.contains(&word.parse().unwrap()), "{word} missing");
        }
    }
}
