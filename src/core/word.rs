//! Game word representation
//!
//! A Word is an immutable 5-letter uppercase token.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word the game accepts
pub const WORD_LEN: usize = 5;

/// A 5-letter uppercase word
///
/// Keeps the letters as bytes for feedback calculation alongside the text.
/// Ordering is alphabetical, so sorted collections of words enumerate predictably.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LEN],
    text: String,
}

/// Why a string is not a playable word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected {WORD_LEN} letters, found {found}")]
    Length { found: usize },
    #[error("only ASCII letters are allowed")]
    NotAscii,
    #[error("'{0}' is not a letter")]
    NotALetter(char),
}

impl Word {
    /// Normalize and validate a candidate word
    ///
    /// Input is trimmed and uppercased first. Length counts characters, so a
    /// multi-byte input reports the length a player would count.
    ///
    /// # Errors
    /// `Length` for anything but five characters, `NotAscii` for accented or
    /// other non-ASCII input, `NotALetter` for digits, spaces and punctuation.
    ///
    /// # Examples
    /// ```
    /// use wordle_host::core::Word;
    ///
    /// let word = Word::new(" crane\n").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();

        let found = text.chars().count();
        if found != WORD_LEN {
            return Err(WordError::Length { found });
        }
        if !text.is_ascii() {
            return Err(WordError::NotAscii);
        }
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(WordError::NotALetter(bad));
        }

        let mut chars = [0; WORD_LEN];
        chars.copy_from_slice(text.as_bytes());
        Ok(Self { chars, text })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Uppercase ASCII letters, one byte per position
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
