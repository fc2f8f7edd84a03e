//! Candidate partitioning by feedback pattern
//!
//! Given a guess and a candidate pool, groups every candidate by the pattern
//! the guess would receive if that candidate were the target.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Candidates grouped by the feedback they would produce
///
/// Buckets are disjoint and their union is the partitioned pool. There are at
/// most 3^5 keys. Iteration order is unspecified.
pub type Buckets = FxHashMap<Pattern, Vec<Word>>;

/// Partition `pool` by the pattern `guess` would receive against each candidate
///
/// # Examples
/// ```
/// use wordle_host::core::{Pattern, Word};
/// use wordle_host::engine::partition;
///
/// let guess = Word::new("crane").unwrap();
/// let pool = vec![
///     Word::new("crane").unwrap(),
///     Word::new("slate").unwrap(),
///     Word::new("plate").unwrap(),
/// ];
///
/// let buckets = partition(&pool, &guess);
/// assert_eq!(buckets.len(), 2);
/// assert_eq!(buckets[&Pattern::PERFECT].len(), 1);
/// ```
#[must_use]
pub fn partition(pool: &[Word], guess: &Word) -> Buckets {
    let mut buckets = Buckets::default();

    for candidate in pool {
        let pattern = Pattern::calculate(guess, candidate);
        buckets.entry(pattern).or_default().push(candidate.clone());
    }

    buckets
}

/// Size of the largest bucket, i.e. the worst-case number of survivors
#[must_use]
pub fn max_bucket_size(buckets: &Buckets) -> usize {
    buckets.values().map(Vec::len).max().unwrap_or(0)
}
