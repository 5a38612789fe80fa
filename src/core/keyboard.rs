//! Cumulative keyboard letter status
//!
//! Tracks the best classification seen for each letter across all guesses of
//! a session. Entries only ever strengthen.

use super::feedback::LetterStatus;
use super::word::Word;
use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Letter → best observed status, with `Correct > Present > Absent`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatusMap {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl KeyboardStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a letter, `Unknown` if never guessed
    ///
    /// Lowercase letters are looked up as their uppercase form.
    #[must_use]
    pub fn status(&self, letter: char) -> LetterStatus {
        u8::try_from(letter.to_ascii_uppercase())
            .ok()
            .and_then(|byte| self.statuses.get(&byte).copied())
            .unwrap_or_default()
    }

    /// Upgrade one letter, keeping the stronger of the old and new status
    pub fn upgrade(&mut self, letter: u8, status: LetterStatus) {
        let entry = self.statuses.entry(letter).or_default();
        if status > *entry {
            *entry = status;
        }
    }

    /// Fold a submitted guess into the map
    ///
    /// Each letter is classified independently of duplicate accounting: correct
    /// when it matches the target at its position, present when the target
    /// holds it elsewhere, absent otherwise. Existing entries are never
    /// downgraded.
    pub fn fold(&mut self, guess: &Word, target: &Word) {
        for (i, &letter) in guess.chars().iter().enumerate() {
            let status = if target.char_at(i) == letter {
                LetterStatus::Correct
            } else if target.has_letter(letter) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            };
            self.upgrade(letter, status);
        }
    }

    /// Copying variant of [`fold`](Self::fold)
    #[must_use]
    pub fn folded(&self, guess: &Word, target: &Word) -> Self {
        let mut next = self.clone();
        next.fold(guess, target);
        next
    }

    /// Number of letters with a known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }

    /// Known letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        (b'A'..=b'Z').filter_map(|letter| {
            self.statuses
                .get(&letter)
                .map(|&status| (char::from(letter), status))
        })
    }
}

impl Serialize for KeyboardStatusMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (letter, status) in self.iter() {
            map.serialize_entry(&letter, &status)?;
        }
        map.end()
    }
}
