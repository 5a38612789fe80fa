//! Per-letter feedback for a guess
//!
//! A [`Feedback`] holds one [`LetterState`] per position: the guessed letter
//! and how it scored against the target.

use super::word::{WORD_LENGTH, Word};
use serde::Serialize;

/// Classification of a single guessed letter
///
/// Variants are declared weakest first so the derived ordering doubles as the
/// keyboard precedence: `Correct > Present > Absent > Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// Not yet guessed
    #[default]
    Unknown,
    /// Letter not in the target (or all its occurrences already credited)
    Absent,
    /// Letter in the target at a different position
    Present,
    /// Letter in the target at this position
    Correct,
}

impl LetterStatus {
    /// Emoji tile used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Unknown => '⬜',
        }
    }
}

/// A guessed letter paired with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterState {
    pub letter: char,
    pub status: LetterStatus,
}

/// Scored row for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// Implements Wordle's duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. First pass: Mark exact matches as correct and remove them from the
    ///    available pool
    /// 2. Second pass: Mark the remaining positions present while the pool
    ///    still holds that letter, absent otherwise
    ///
    /// # Examples
    /// ```
    /// use goobie::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("sagem").unwrap();
    /// let target = Word::new("games").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.states()[1].status, LetterStatus::Correct);
    /// assert_eq!(feedback.to_emoji(), "🟨🟩🟨🟩🟨");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Unknown; WORD_LENGTH];
        let mut target_available = target.char_counts();

        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = LetterStatus::Correct;

                if let Some(count) = target_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            result[i] = match target_available.get_mut(&guess.char_at(i)) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    LetterStatus::Present
                }
                _ => LetterStatus::Absent,
            };
        }

        let chars = guess.chars();
        Self(std::array::from_fn(|i| LetterState {
            letter: char::from(chars[i]),
            status: result[i],
        }))
    }

    /// The five scored letters in guess order
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.count(LetterStatus::Correct) == WORD_LENGTH
    }

    /// Count the letters with the given classification
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|state| state.status == status).count()
    }

    /// Render the row as emoji tiles, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|state| state.status.emoji()).collect()
    }
}

impl IntoIterator for Feedback {
    type Item = LetterState;
    type IntoIter = std::array::IntoIter<LetterState, WORD_LENGTH>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
