//! Game session state machine

use crate::core::{Feedback, KeyboardStatusMap, WORD_LENGTH, Word, WordError};
use crate::gate::DailyGate;
use crate::wordlists::WordCatalog;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Guesses allowed per puzzle
pub const MAX_GUESSES: usize = 6;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or lost: no further guesses are accepted
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotStarted => "not started",
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Error type for rejected session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot {operation} while the game is {status}")]
    InvalidState {
        operation: &'static str,
        status: GameStatus,
    },
    #[error("invalid input: {0}")]
    InvalidInput(#[from] WordError),
    #[error("today's puzzle has already been played")]
    AlreadyPlayedToday,
}

/// One puzzle in progress
///
/// Borrows the catalog it draws targets from and the gate it reports
/// completion to.
pub struct GameSession<'a> {
    catalog: &'a WordCatalog,
    gate: &'a DailyGate,
    target: Option<Word>,
    guesses: Vec<Word>,
    current_input: String,
    status: GameStatus,
    keyboard: KeyboardStatusMap,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(catalog: &'a WordCatalog, gate: &'a DailyGate) -> Self {
        Self {
            catalog,
            gate,
            target: None,
            guesses: Vec::with_capacity(MAX_GUESSES),
            current_input: String::new(),
            status: GameStatus::NotStarted,
            keyboard: KeyboardStatusMap::new(),
        }
    }

    /// Start a puzzle with a thread-local random target
    ///
    /// # Errors
    /// See [`start_with_rng`](Self::start_with_rng).
    pub fn start(&mut self) -> Result<(), GameError> {
        self.start_with_rng(&mut rand::rng())
    }

    /// Start a puzzle, drawing the target with `rng`
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` unless the session is `NotStarted`,
    /// and `GameError::AlreadyPlayedToday` if the gate's played lock is set.
    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.require(GameStatus::NotStarted, "start a new game")?;

        if !self.gate.may_play_today() {
            return Err(GameError::AlreadyPlayedToday);
        }

        let target = self.catalog.pick_random(rng).clone();
        tracing::debug!("Starting puzzle ({} catalog words)", self.catalog.len());

        self.target = Some(target);
        self.guesses.clear();
        self.current_input.clear();
        self.keyboard.clear();
        self.status = GameStatus::Playing;
        Ok(())
    }

    /// Return to `NotStarted`, discarding the current puzzle
    ///
    /// Does not touch the gate; a finished puzzle stays recorded.
    pub fn reset(&mut self) {
        self.target = None;
        self.guesses.clear();
        self.current_input.clear();
        self.keyboard.clear();
        self.status = GameStatus::NotStarted;
    }

    /// Replace the input buffer with `text`, uppercased
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` outside `Playing` and
    /// `GameError::InvalidInput` for more than 5 characters or non-letters.
    /// The buffer is left unchanged on error.
    pub fn update_current_input(&mut self, text: &str) -> Result<(), GameError> {
        self.require(GameStatus::Playing, "edit the guess")?;

        let len = text.chars().count();
        if len > WORD_LENGTH {
            return Err(WordError::InvalidLength(len).into());
        }
        if !text.is_ascii() {
            return Err(WordError::NonAscii.into());
        }
        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters.into());
        }

        self.current_input = text.to_ascii_uppercase();
        Ok(())
    }

    /// Append one letter to the input buffer
    ///
    /// # Errors
    /// Same conditions as [`update_current_input`](Self::update_current_input).
    pub fn push_letter(&mut self, letter: char) -> Result<(), GameError> {
        let mut next = self.current_input.clone();
        next.push(letter);
        self.update_current_input(&next)
    }

    /// Remove the last letter of the input buffer; no-op when empty
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` outside `Playing`.
    pub fn delete_last_letter(&mut self) -> Result<(), GameError> {
        self.require(GameStatus::Playing, "edit the guess")?;
        self.current_input.pop();
        Ok(())
    }

    /// Submit a guess
    ///
    /// Returns `false` without changing anything when the session is not
    /// `Playing` or `guess` is not a valid 5-letter word.
    pub fn submit_guess(&mut self, guess: &str) -> bool {
        if self.status != GameStatus::Playing {
            tracing::debug!("Guess rejected: game is {}", self.status);
            return false;
        }
        let Some(target) = self.target.as_ref() else {
            return false;
        };
        let guess = match Word::new(guess) {
            Ok(word) => word,
            Err(e) => {
                tracing::debug!("Guess rejected: {}", e);
                return false;
            }
        };

        self.keyboard.fold(&guess, target);
        let solved = &guess == target;
        self.guesses.push(guess);
        self.current_input.clear();

        tracing::debug!("Guess {}/{} accepted", self.guesses.len(), MAX_GUESSES);

        if solved {
            self.finish(GameStatus::Won);
        } else if self.guesses.len() >= MAX_GUESSES {
            self.finish(GameStatus::Lost);
        }

        true
    }

    /// Submit the input buffer as a guess
    pub fn submit_current_input(&mut self) -> bool {
        let input = self.current_input.clone();
        self.submit_guess(&input)
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        tracing::info!(
            "Puzzle {} after {}/{} guesses",
            status,
            self.guesses.len(),
            MAX_GUESSES
        );

        if self.gate.is_free_mode_enabled() {
            tracing::debug!("Free mode: not recording today's play");
            return;
        }
        if let Err(e) = self.gate.record_played_today() {
            tracing::error!("Failed to record today's play: {}", e);
        }
    }

    fn require(&self, expected: GameStatus, operation: &'static str) -> Result<(), GameError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState {
                operation,
                status: self.status,
            })
        }
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The target word, `None` before the first start
    ///
    /// Renderers should only show it once the status is terminal.
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatusMap {
        &self.keyboard
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    /// Scored rows for every submitted guess, in submission order
    #[must_use]
    pub fn rows(&self) -> Vec<Feedback> {
        self.target.as_ref().map_or_else(Vec::new, |target| {
            self.guesses
                .iter()
                .map(|guess| Feedback::evaluate(guess, target))
                .collect()
        })
    }

    /// Emoji result grid for a finished puzzle
    ///
    /// ```text
    /// Goobie 3/6
    ///
    /// ⬜🟨⬜⬜🟩
    /// 🟩⬜🟨🟩⬜
    /// 🟩🟩🟩🟩🟩
    /// ```
    #[must_use]
    pub fn share_grid(&self) -> Option<String> {
        let score = match self.status {
            GameStatus::Won => self.guesses.len().to_string(),
            GameStatus::Lost => "X".to_string(),
            GameStatus::NotStarted | GameStatus::Playing => return None,
        };

        let mut grid = format!("Goobie {score}/{MAX_GUESSES}\n");
        for row in self.rows() {
            grid.push('\n');
            grid.push_str(&row.to_emoji());
        }
        Some(grid)
    }
}
