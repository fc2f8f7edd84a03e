//! Adversarial bucket selection
//!
//! Instead of committing to a target, the host keeps every word consistent
//! with the feedback so far and, on each guess, answers with the feedback
//! that reveals the least.

use super::partition::Buckets;
use crate::core::{Pattern, Word};
use std::cmp::Reverse;

/// Weight of a `Correct` position in the information score
pub const CORRECT_WEIGHT: u32 = 10;
/// Weight of a `Present` position in the information score
pub const PRESENT_WEIGHT: u32 = 1;

/// How much a pattern reveals to the player
///
/// `10 × correct + 1 × present`; absent positions score nothing.
///
/// # Examples
/// ```
/// use wordle_host::core::Pattern;
/// use wordle_host::engine::information_score;
///
/// assert_eq!(information_score(Pattern::PERFECT), 50);
/// assert_eq!(information_score(Pattern::parse("GY-Y-").unwrap()), 12);
/// ```
#[must_use]
pub fn information_score(pattern: Pattern) -> u32 {
    CORRECT_WEIGHT * u32::from(pattern.count_correct())
        + PRESENT_WEIGHT * u32::from(pattern.count_present())
}

/// Select the bucket that leaks the least information
///
/// Ranking, first difference wins:
/// 1. Lowest information score
/// 2. Most candidates kept alive
/// 3. Smallest pattern (`Absent < Present < Correct`, position by position)
///
/// Returns the feedback to show and the new candidate pool, or `None` when
/// there are no buckets.
///
/// # Examples
/// ```
/// use wordle_host::core::Word;
/// use wordle_host::engine::{partition, select_worst_case_bucket};
///
/// let guess = Word::new("crane").unwrap();
/// let pool = vec![Word::new("crane").unwrap(), Word::new("swift").unwrap()];
///
/// let (pattern, survivors) = select_worst_case_bucket(partition(&pool, &guess)).unwrap();
/// assert_eq!(pattern.to_string(), "-----");
/// assert_eq!(survivors, vec![Word::new("swift").unwrap()]);
/// ```
#[must_use]
pub fn select_worst_case_bucket(buckets: Buckets) -> Option<(Pattern, Vec<Word>)> {
    buckets
        .into_iter()
        .min_by_key(|(pattern, bucket)| {
            (
                information_score(*pattern),
                Reverse(bucket.len()),
                *pattern,
            )
        })
}
