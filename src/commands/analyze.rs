//! Guess analysis command
//!
//! Shows how a guess splits a word list into feedback buckets and which bucket
//! the adversarial host would answer with.

use crate::core::{Pattern, Word, WordList};
use crate::engine::{information_score, max_bucket_size, partition, select_worst_case_bucket};
use std::cmp::Reverse;

/// One feedback bucket
pub struct BucketSummary {
    pub pattern: Pattern,
    pub score: u32,
    pub size: usize,
    pub sample: Vec<String>,
}

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    pub total_candidates: usize,
    /// Buckets in the order the host ranks them, chosen bucket first
    pub buckets: Vec<BucketSummary>,
    pub largest_bucket: usize,
    pub chosen: Pattern,
    pub survivors: usize,
}

const SAMPLE_SIZE: usize = 5;

/// Partition `words` by `guess` and report the host's choice
///
/// # Errors
///
/// Returns an error if:
/// - The guess is invalid (not 5 letters or contains non-letters)
/// - The guess is not in the word list
pub fn analyze_guess(guess: &str, words: &WordList) -> Result<AnalysisResult, String> {
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid word: {e}"))?;

    if !words.contains(&guess_word) {
        return Err(format!("Word '{}' not in word list", guess_word.text()));
    }

    let buckets = partition(words.as_slice(), &guess_word);

    let mut summaries: Vec<BucketSummary> = buckets
        .iter()
        .map(|(&pattern, bucket)| BucketSummary {
            pattern,
            score: information_score(pattern),
            size: bucket.len(),
            sample: bucket
                .iter()
                .take(SAMPLE_SIZE)
                .map(|w| w.text().to_string())
                .collect(),
        })
        .collect();
    summaries.sort_by_key(|b| (b.score, Reverse(b.size), b.pattern));
    let largest_bucket = max_bucket_size(&buckets);

    let (chosen, survivors) =
        select_worst_case_bucket(buckets).ok_or_else(|| "Word list is empty".to_string())?;

    Ok(AnalysisResult {
        guess: guess_word.text().to_string(),
        total_candidates: words.len(),
        buckets: summaries,
        largest_bucket,
        chosen,
        survivors: survivors.len(),
    })
}
