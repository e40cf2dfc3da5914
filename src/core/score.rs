//! Round scoring
//!
//! Longer words earn more, wrong guesses cost, harder levels multiply.

use super::Difficulty;

/// Points per letter of the hidden word
const LETTER_VALUE: u32 = 10;

/// Points deducted per wrong guess
const MISS_PENALTY: u32 = 5;

/// Compute the score for a winning round
///
/// `word_length * 10 - wrong_count * 5`, floored at zero, then multiplied
/// by the difficulty multiplier. The floor applies before the multiplier.
///
/// # Examples
/// ```
/// use gallows::core::{Difficulty, compute_score};
///
/// assert_eq!(compute_score(Difficulty::Easy, 5, 0), 50);
/// assert_eq!(compute_score(Difficulty::Medium, 5, 2), 80);
/// ```
#[must_use]
pub fn compute_score(difficulty: Difficulty, word_length: usize, wrong_count: u32) -> u32 {
    let base = word_length as u32 * LETTER_VALUE;
    let penalty = wrong_count * MISS_PENALTY;
    base.saturating_sub(penalty) * difficulty.multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easy_clean_win() {
        assert_eq!(compute_score(Difficulty::Easy, 5, 0), 50);
    }

    #[test]
    fn medium_with_misses() {
        assert_eq!(compute_score(Difficulty::Medium, 5, 2), 80);
    }

    #[test]
    fn floor_applied_before_multiplier() {
        // 30 - 50 floors to 0, and 0 * 3 stays 0
        assert_eq!(compute_score(Difficulty::Hard, 3, 10), 0);
    }

    #[test]
    fn hard_clean_win() {
        assert_eq!(compute_score(Difficulty::Hard, 5, 0), 150);
    }

    #[test]
    fn deterministic() {
        for _ in 0..3 {
            assert_eq!(compute_score(Difficulty::Medium, 7, 3), 110);
        }
    }
}
