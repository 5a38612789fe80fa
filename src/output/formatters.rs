//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardStatusMap, LetterStatus};
use colored::{ColoredString, Colorize};

/// Keyboard rows as laid out on screen
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Color a single tile by its status
#[must_use]
pub fn colored_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
        LetterStatus::Unknown => tile.bold(),
    }
}

/// Format a scored row as colored tiles
#[must_use]
pub fn feedback_row(feedback: &Feedback) -> String {
    feedback
        .states()
        .iter()
        .map(|state| colored_tile(state.letter, state.status).to_string())
        .collect()
}

/// Format an unscored row: typed letters followed by blanks
#[must_use]
pub fn pending_row(input: &str) -> String {
    let mut row: String = input
        .chars()
        .map(|letter| colored_tile(letter, LetterStatus::Unknown).to_string())
        .collect();
    for _ in input.chars().count()..crate::core::WORD_LENGTH {
        row.push_str(&" · ".bright_black().to_string());
    }
    row
}

/// Plain-text keyboard row with `[X]` marking correct, `(X)` present and
/// `.` absent letters, for terminals without color
#[must_use]
pub fn keyboard_row_plain(row: &str, keyboard: &KeyboardStatusMap) -> String {
    row.chars()
        .map(|letter| match keyboard.status(letter) {
            LetterStatus::Correct => format!("[{letter}]"),
            LetterStatus::Present => format!("({letter})"),
            LetterStatus::Absent => " . ".to_string(),
            LetterStatus::Unknown => format!(" {letter} "),
        })
        .collect()
}
