//! Per-letter feedback and the scorer that produces it
//!
//! Feedback is one `LetterStatus` per guess position:
//! - Absent  (letter not in word, after duplicates are accounted for)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)

use super::Word;
use rustc_hash::FxHashMap;

/// Classification of a single guessed letter
///
/// Ordered from least to most informative so the best status seen for a letter
/// is simply the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

/// Feedback for one guess, index-aligned with the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

/// Score `guess` against `answer`
///
/// Callers should pass equal-length sequences; the session checks this before
/// scoring. Otherwise only the overlapping positions are compared, and guess
/// positions past the end of the answer are reported as Absent.
///
/// # Algorithm
/// 1. First pass: mark exact matches Correct; every answer letter that was not
///    matched goes into the remaining pool
/// 2. Second pass, left to right: a non-Correct letter is Present while the pool
///    still holds one of it (consuming it), otherwise Absent
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus::*, score};
///
/// let guess: Vec<char> = "speed".chars().collect();
/// let answer: Vec<char> = "erase".chars().collect();
///
/// assert_eq!(
///     score(&guess, &answer).statuses(),
///     &[Present, Absent, Present, Present, Absent]
/// );
/// ```
#[must_use]
pub fn score(guess: &[char], answer: &[char]) -> Feedback {
    let mut statuses = vec![LetterStatus::Absent; guess.len()];
    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();

    // First pass: greens, and build the pool from unmatched answer positions
    for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
        if g == a {
            statuses[i] = LetterStatus::Correct;
        } else {
            *remaining.entry(a).or_insert(0) += 1;
        }
    }

    // Second pass: yellows from whatever is left
    for (status, letter) in statuses.iter_mut().zip(guess).take(answer.len()) {
        if *status == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(letter)
            && *count > 0
        {
            *status = LetterStatus::Present;
            *count -= 1;
        }
    }

    Feedback(statuses)
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `answer`
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        score(guess.chars(), answer.chars())
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<LetterStatus>> for Feedback {
    fn from(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn score_str(guess: &str, answer: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn all_absent() {
        let feedback = score_str("abcde", "fghij");
        assert_eq!(feedback.statuses(), &[Absent; 5]);
        assert_eq!(feedback.count(Correct), 0);
        assert_eq!(feedback.count(Present), 0);
    }

    #[test]
    fn identical_words_all_correct() {
        for word in ["crane", "slate", "zzzzz", "a", "extraordinary"] {
            let feedback = score_str(word, word);
            assert!(feedback.is_perfect());
            assert_eq!(feedback.len(), word.len());
        }
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: no exact matches, ERASE holds two E's and one S
        let feedback = score_str("speed", "erase");
        assert_eq!(
            feedback.statuses(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_exact_matches_leave_pool_first() {
        // AABBB vs ABABA: greens at 0 and 3, pool {b:1, a:2}
        let feedback = score_str("aabbb", "ababa");
        assert_eq!(
            feedback.statuses(),
            &[Correct, Present, Present, Correct, Absent]
        );
    }

    #[test]
    fn later_exact_match_is_not_stolen_by_earlier_duplicate() {
        // ROBOT vs FLOOR: the second O is green, the first O takes the other O
        let feedback = score_str("robot", "floor");
        assert_eq!(
            feedback.statuses(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn extra_duplicates_beyond_answer_count_are_absent() {
        // Only one E in CRANE; the green at position 4 consumes it
        let feedback = score_str("eerie", "crane");
        assert_eq!(feedback.statuses(), &[Absent, Absent, Present, Absent, Correct]);
    }

    #[test]
    fn real_wordle_example() {
        let feedback = score_str("crane", "slate");
        assert_eq!(feedback.statuses(), &[Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn correct_count_equals_exact_position_matches() {
        let pairs = [
            ("speed", "erase"),
            ("aabbb", "ababa"),
            ("robot", "floor"),
            ("mamma", "madam"),
            ("llama", "lalal"),
        ];

        for (guess, answer) in pairs {
            let exact = guess
                .chars()
                .zip(answer.chars())
                .filter(|(g, a)| g == a)
                .count();
            let feedback = score_str(guess, answer);
            assert_eq!(feedback.len(), guess.len());
            assert_eq!(feedback.count(Correct), exact, "{guess} vs {answer}");
        }
    }

    #[test]
    fn present_never_exceeds_unmatched_answer_letters() {
        // Three L's guessed, answer has two, one of them an exact match
        let feedback = score_str("lllab", "hello");
        assert_eq!(feedback.statuses(), &[Present, Absent, Correct, Absent, Absent]);
    }

    #[test]
    fn guess_longer_than_answer_leaves_tail_absent() {
        let feedback = score(&['a', 'b', 'c'], &['b']);
        assert_eq!(feedback.statuses(), &[Absent, Absent, Absent]);

        let feedback = score(&['b', 'a', 'b'], &['b', 'b']);
        assert_eq!(feedback.statuses(), &[Correct, Absent, Absent]);
    }

    #[test]
    fn guess_shorter_than_answer_is_scored_on_its_own_positions() {
        // Only the overlapping answer positions feed the pool
        let feedback = score(&['r', 'c'], &['c', 'r', 'a', 'n', 'e']);
        assert_eq!(feedback.statuses(), &[Present, Present]);

        let feedback = score(&['e', 'c'], &['c', 'r', 'a', 'n', 'e']);
        assert_eq!(feedback.statuses(), &[Absent, Present]);
    }

    #[test]
    fn score_is_deterministic() {
        let guess: Vec<char> = "mamma".chars().collect();
        let answer: Vec<char> = "madam".chars().collect();
        assert_eq!(score(&guess, &answer), score(&guess, &answer));
    }

    #[test]
    fn ordering_puts_correct_on_top() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!([Absent, Correct, Present].into_iter().max(), Some(Correct));
    }
}
