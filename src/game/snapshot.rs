//! Render-ready view of a session
//!
//! Renderers poll a snapshot after each input event instead of reaching into
//! the session. Snapshots own their data and serialize to JSON.

use super::session::{GameSession, GameStatus, MAX_GUESSES};
use crate::core::{Feedback, KeyboardStatusMap, Word};
use serde::Serialize;

/// Point-in-time copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub status: GameStatus,
    pub guesses: Vec<Word>,
    pub rows: Vec<Feedback>,
    pub current_input: String,
    pub max_guesses: usize,
    pub letter_statuses: KeyboardStatusMap,
    /// Only present once the puzzle is won or lost
    pub revealed_target: Option<Word>,
}

impl SessionSnapshot {
    /// Index of the row the input buffer is drawn on, if any
    #[must_use]
    pub fn current_row(&self) -> Option<usize> {
        (self.status == GameStatus::Playing).then_some(self.guesses.len())
    }
}

impl GameSession<'_> {
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status(),
            guesses: self.guesses().to_vec(),
            rows: self.rows(),
            current_input: self.current_input().to_string(),
            max_guesses: MAX_GUESSES,
            letter_statuses: self.keyboard().clone(),
            revealed_target: self
                .status()
                .is_terminal()
                .then(|| self.target().cloned())
                .flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Word;
    use crate::game::{GameSession, GameStatus};
    use crate::gate::{DailyGate, FixedClock, MemoryStore};
    use crate::wordlists::WordCatalog;
    use chrono::NaiveDate;

    fn fixtures() -> (WordCatalog, DailyGate) {
        let catalog = WordCatalog::new(vec![Word::new("chain").unwrap()]).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        (catalog, DailyGate::new(MemoryStore::new(), FixedClock(today)))
    }

    #[test]
    fn snapshot_hides_target_while_playing() {
        let (catalog, gate) = fixtures();
        let mut session = GameSession::new(&catalog, &gate);
        session.start().unwrap();
        session.submit_guess("clear");
        session.update_current_input("ch").unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(snapshot.rows.len(), 1);
        assert_eq!(snapshot.current_input, "CH");
        assert_eq!(snapshot.current_row(), Some(1));
        assert!(snapshot.revealed_target.is_none());
    }

    #[test]
    fn snapshot_reveals_target_when_lost() {
        let (catalog, gate) = fixtures();
        let mut session = GameSession::new(&catalog, &gate);
        session.start().unwrap();
        for _ in 0..6 {
            assert!(session.submit_guess("witty"));
        }

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, GameStatus::Lost);
        assert_eq!(snapshot.current_row(), None);
        assert_eq!(
            snapshot.revealed_target.as_ref().map(Word::text),
            Some("CHAIN")
        );
    }

    #[test]
    fn snapshot_serializes_for_renderers() {
        let (catalog, gate) = fixtures();
        let mut session = GameSession::new(&catalog, &gate);
        session.start().unwrap();
        session.submit_guess("chain");

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["status"], "won");
        assert_eq!(json["maxGuesses"], 6);
        assert_eq!(json["guesses"][0], "CHAIN");
        assert_eq!(json["rows"][0][0]["status"], "correct");
        assert_eq!(json["letterStatuses"]["C"], "correct");
        assert_eq!(json["revealedTarget"], "CHAIN");
    }
}
