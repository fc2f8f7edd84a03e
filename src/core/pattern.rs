//! Guess feedback calculation and representation
//!
//! A pattern is the 5-slot verdict for one guess against one target:
//! - `Correct` = letter in the right position (green)
//! - `Present` = letter elsewhere in the target (yellow)
//! - `Absent` = letter not available in the target (gray)

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Verdict for a single guess position
///
/// Ordered `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback pattern for a guess
///
/// Exactly one status per guess position. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern([LetterStatus; WORD_LEN]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LEN]);

    /// Create a pattern from per-position statuses
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LEN]) -> Self {
        Self(statuses)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LEN] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// Implements the standard duplicate-letter rules with two passes over a
    /// working copy of the target:
    /// 1. Exact position matches are marked `Correct` and consumed
    /// 2. Remaining guess letters are marked `Present` if an unconsumed
    ///    instance is left (consuming it), otherwise `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_host::core::{LetterStatus::*, Pattern, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     pattern.statuses(),
    ///     &[Absent, Correct, Correct, Present, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LEN];
        let mut remaining: [Option<u8>; WORD_LEN] = (*target.chars()).map(Some);

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = LetterStatus::Correct;
                remaining[i] = None;
            }
        }

        // Second pass: letters present elsewhere, each target instance used once
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(g)) {
                result[i] = LetterStatus::Present;
                *slot = None;
            }
        }

        Self(result)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(self) -> u8 {
        self.count(LetterStatus::Correct)
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(self) -> u8 {
        self.count(LetterStatus::Present)
    }

    fn count(self, wanted: LetterStatus) -> u8 {
        self.0.iter().filter(|&&status| status == wanted).count() as u8
    }

    /// Parse a pattern from a string like "GYGGY" or "🟩🟨🟩🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_host::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return None;
        }

        let mut statuses = [LetterStatus::Absent; WORD_LEN];
        for (slot, ch) in statuses.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterStatus::Correct,
                'Y' | 'y' | '🟨' => LetterStatus::Present,
                '-' | '_' | '⬜' => LetterStatus::Absent,
                _ => return None,
            };
        }

        Some(Self(statuses))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_host::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|status| match status {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
