//! Goobie word representation
//!
//! A Word is an immutable 5-letter uppercase ASCII string. Targets drawn from
//! the catalog and guesses submitted by the player share this type.

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Number of letters in every Goobie word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Goobie word, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use goobie::core::Word;
    ///
    /// let word = Word::new("games").unwrap();
    /// assert_eq!(word.text(), "GAMES");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        text.make_ascii_uppercase();

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used as the available-letter pool during evaluation.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("GAMES").unwrap();
        assert_eq!(word.text(), "GAMES");
        assert_eq!(word.chars(), b"GAMES");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("games").unwrap();
        assert_eq!(word.text(), "GAMES");

        let word2 = Word::new("GaMeS").unwrap();
        assert_eq!(word2.text(), "GAMES");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("gam3s"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(Word::new("gam s").is_err());
        assert!(Word::new("game!").is_err());
        assert!(matches!(Word::new("gamés"), Err(WordError::NonAscii)));
        // ß would uppercase to SS and pad a 4-letter input to 5
        assert!(matches!(Word::new("gamß"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("frame").unwrap();
        assert_eq!(word.char_at(0), b'F');
        assert_eq!(word.char_at(4), b'E');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("chain").unwrap();
        assert!(word.has_letter(b'C'));
        assert!(word.has_letter(b'N'));
        assert!(!word.has_letter(b'Z'));
        assert!(!word.has_letter(b'c'));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'P'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'D'), Some(&1));
    }

    #[test]
    fn word_char_counts_all_same() {
        let word = Word::new("zzzzz").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'Z'), Some(&5));
    }

    #[test]
    fn word_display() {
        let word = Word::new("gooby").unwrap();
        assert_eq!(format!("{word}"), "GOOBY");
    }

    #[test]
    fn word_serializes_as_string() {
        let word = Word::new("magic").unwrap();
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"MAGIC\"");
    }
}
