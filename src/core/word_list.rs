//! Set of unique words with membership testing and random selection

use super::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// A set of unique words
///
/// Enumeration follows first-seen insertion order; callers must not rely on
/// any particular order beyond that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from words, dropping duplicates
    ///
    /// # Examples
    /// ```
    /// use wordle_host::core::{Word, WordList};
    ///
    /// let list = WordList::new(["react", "swift", "REACT"].map(|w| Word::new(w).unwrap()));
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains(&Word::new("react").unwrap()));
    /// ```
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        list.extend(words);
        list
    }

    /// Build a list from raw strings, skipping anything that is not a valid word
    #[must_use]
    pub fn from_strs<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        Self::new(words.into_iter().filter_map(|w| Word::new(w).ok()))
    }

    fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        for word in words {
            if self.index.insert(word.clone()) {
                self.words.push(word);
            }
        }
    }

    /// Membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Words as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Replace the whole contents in bulk
    pub fn replace(&mut self, words: impl IntoIterator<Item = Word>) {
        self.words.clear();
        self.index.clear();
        self.extend(words);
    }

    /// Uppercase text of every word
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.words.iter().map(|w| w.text().to_string()).collect()
    }

    /// Pick a word uniformly at random, or `None` if the list is empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::from_strs(words)
    }

    #[test]
    fn deduplicates_and_keeps_first_seen_order() {
        let words = list(&["react", "swift", "react", "scala"]);
        assert_eq!(words.to_strings(), ["REACT", "SWIFT", "SCALA"]);
    }

    #[test]
    fn from_strs_skips_invalid_entries() {
        let words = list(&["unity", "toolong", "abc", "sc4la"]);
        assert_eq!(words.to_strings(), ["UNITY"]);
    }

    #[test]
    fn membership_is_case_insensitive_via_word() {
        let words = list(&["CRANE"]);
        assert!(words.contains(&Word::new("crane").unwrap()));
        assert!(!words.contains(&Word::new("slate").unwrap()));
    }

    #[test]
    fn replace_swaps_contents() {
        let mut words = list(&["react", "swift"]);
        words.replace(list(&["unity"]).iter().cloned());

        assert_eq!(words.len(), 1);
        assert!(!words.contains(&Word::new("react").unwrap()));
        assert!(words.contains(&Word::new("unity").unwrap()));
    }

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(WordList::default().choose(&mut rng).is_none());
    }

    #[test]
    fn choose_returns_member() {
        let words = list(&["react", "swift", "scala", "unity"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = words.choose(&mut rng).unwrap();
            assert!(words.contains(picked));
        }
    }

    #[test]
    fn seeded_choice_is_reproducible() {
        let words = list(&["react", "swift", "scala", "unity"]);
        let a = words.choose(&mut StdRng::seed_from_u64(42)).cloned();
        let b = words.choose(&mut StdRng::seed_from_u64(42)).cloned();
        assert_eq!(a, b);
    }
}
