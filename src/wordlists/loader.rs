//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines and lines starting with `#` are ignored;
/// entries that are not valid 5-letter words are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use goobie::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    tracing::warn!("Skipping '{}' in {}: {}", trimmed, path.display(), e);
                    None
                }
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use goobie::wordlists::loader::words_from_slice;
/// use goobie::wordlists::CATALOG;
///
/// let words = words_from_slice(CATALOG);
/// assert_eq!(words.len(), CATALOG.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["gooby", "GAMES", "Frame"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "GOOBY");
        assert_eq!(words[1].text(), "GAMES");
        assert_eq!(words[2].text(), "FRAME");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["gooby", "toolong", "abc", "games"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "GOOBY");
        assert_eq!(words[1].text(), "GAMES");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_comments_and_junk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "# custom catalog").unwrap();
        writeln!(file, "magic").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  token  ").unwrap();
        writeln!(file, "nope").unwrap();

        let words = load_from_file(&path).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["MAGIC", "TOKEN"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }
}
