//! Word catalog for Goobie
//!
//! The fixed set of target words a session draws from. The built-in catalog
//! is compiled into the binary; a custom one can be loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{CATALOG, CATALOG_COUNT};

use crate::core::Word;
use rand::Rng;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for catalog construction
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("word catalog is empty")]
    Empty,
    #[error("failed to read word catalog: {0}")]
    Io(#[from] io::Error),
}

/// A non-empty set of target words
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: Vec<Word>,
}

impl WordCatalog {
    /// Build a catalog from a list of words
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, CatalogError> {
        if words.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { words })
    }

    /// The catalog compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        // build.rs rejects an empty or malformed catalog file
        Self {
            words: loader::words_from_slice(CATALOG),
        }
    }

    /// Load a catalog from a file, one word per line
    ///
    /// # Errors
    /// Returns `CatalogError::Io` if the file cannot be read and
    /// `CatalogError::Empty` if it holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Pick a target word uniformly at random
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn catalog_count_matches_const() {
        assert_eq!(CATALOG.len(), CATALOG_COUNT);
        assert_eq!(CATALOG_COUNT, 32);
    }

    #[test]
    fn catalog_words_are_uppercase_five_letters() {
        for &word in CATALOG {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_catalog_is_complete() {
        let catalog = WordCatalog::embedded();
        assert_eq!(catalog.len(), CATALOG_COUNT);
        assert!(catalog.contains(&Word::new("gooby").unwrap()));
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(WordCatalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn pick_random_stays_in_catalog() {
        let catalog = WordCatalog::embedded();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let word = catalog.pick_random(&mut rng);
            assert!(catalog.contains(word));
        }
    }

    #[test]
    fn pick_random_single_word() {
        let only = Word::new("zippy").unwrap();
        let catalog = WordCatalog::new(vec![only.clone()]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(catalog.pick_random(&mut rng), &only);
    }

    #[test]
    fn pick_random_reaches_every_word() {
        let catalog = WordCatalog::new(crate::wordlists::loader::words_from_slice(&[
            "games", "frame", "chain",
        ]))
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(catalog.pick_random(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn from_file_with_no_valid_words_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "abc\ntoolong\n").unwrap();
        assert!(matches!(
            WordCatalog::from_file(&path),
            Err(CatalogError::Empty)
        ));
    }
}
