//! TUI application state and logic

use crate::game::{GameError, GameSession, GameStatus};
use crate::gate::{DailyGate, GateStatus};
use crate::wordlists::WordCatalog;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub gate: &'a DailyGate,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Which card the UI shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// No payment recorded today
    Payment,
    /// Today's puzzle finished in an earlier run
    Locked,
    /// Paid and unlocked, waiting for the player to start
    Ready,
    /// Puzzle in progress
    Board,
    /// Puzzle just won or lost
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Games finished during this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(catalog: &'a WordCatalog, gate: &'a DailyGate) -> Self {
        Self {
            session: GameSession::new(catalog, gate),
            gate,
            messages: vec![Message {
                text: "Welcome to Goobie! Guess the 5-letter word in 6 tries.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match self.session.status() {
            GameStatus::Playing => Screen::Board,
            GameStatus::Won | GameStatus::Lost => Screen::Finished,
            GameStatus::NotStarted => match self.gate.status() {
                GateStatus::NeedsPayment => Screen::Payment,
                GateStatus::AlreadyPlayed => Screen::Locked,
                GateStatus::Open => Screen::Ready,
            },
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.screen() {
            Screen::Payment => match key.code {
                KeyCode::Char('p') => self.pay(),
                KeyCode::Char('f') => self.toggle_free_mode(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Locked => match key.code {
                KeyCode::Char('f') => self.toggle_free_mode(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Ready => match key.code {
                KeyCode::Enter | KeyCode::Char('s') => self.start_game(),
                KeyCode::Char('f') => self.toggle_free_mode(),
                KeyCode::Char('r') => self.reset_payment(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Board => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    match self.session.push_letter(c) {
                        // A full buffer ignores further letters
                        Ok(()) | Err(GameError::InvalidInput(_)) => {}
                        Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                    }
                }
                KeyCode::Backspace => {
                    if let Err(e) = self.session.delete_last_letter() {
                        self.add_message(&e.to_string(), MessageStyle::Error);
                    }
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            Screen::Finished => match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    pub fn pay(&mut self) {
        match self.gate.record_paid_today() {
            Ok(()) => self.add_message(
                "Payment received. Enjoy today's puzzle!",
                MessageStyle::Success,
            ),
            Err(e) => self.add_message(
                &format!("Payment could not be saved: {e}"),
                MessageStyle::Error,
            ),
        }
    }

    pub fn reset_payment(&mut self) {
        match self.gate.clear_paid_today() {
            Ok(()) => self.add_message("Payment reset (demo)", MessageStyle::Info),
            Err(e) => self.add_message(&format!("Reset failed: {e}"), MessageStyle::Error),
        }
    }

    pub fn toggle_free_mode(&mut self) {
        match self.gate.toggle_free_mode() {
            Ok(true) => self.add_message(
                "Free mode on: finished games are not recorded",
                MessageStyle::Info,
            ),
            Ok(false) => self.add_message("Free mode off", MessageStyle::Info),
            Err(e) => self.add_message(
                &format!("Could not save free mode: {e}"),
                MessageStyle::Error,
            ),
        }
    }

    pub fn start_game(&mut self) {
        match self.session.start() {
            Ok(()) => self.add_message(
                "New game started! Type a word and press Enter.",
                MessageStyle::Info,
            ),
            Err(GameError::AlreadyPlayedToday) => {
                self.add_message(
                    "Already played today. Come back tomorrow!",
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        if !self.gate.may_play_today() {
            self.add_message("Come back tomorrow for a new puzzle!", MessageStyle::Info);
            return;
        }
        self.session.reset();
        self.start_game();
    }

    pub fn submit(&mut self) {
        if self.session.current_input().len() < crate::core::WORD_LENGTH {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }
        if !self.session.submit_current_input() {
            self.add_message("Guess rejected", MessageStyle::Error);
            return;
        }

        let guess_count = self.session.guesses().len();
        match self.session.status() {
            GameStatus::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                let word = self
                    .session
                    .target()
                    .map_or_else(String::new, |w| w.text().to_string());
                self.add_message(
                    &format!("Game over! The word was {word}"),
                    MessageStyle::Error,
                );
            }
            GameStatus::NotStarted | GameStatus::Playing => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::gate::{FixedClock, MemoryStore};
    use chrono::NaiveDate;

    fn fixtures() -> (WordCatalog, DailyGate) {
        let catalog = WordCatalog::new(vec![Word::new("frame").unwrap()]).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        (catalog, DailyGate::new(MemoryStore::new(), FixedClock(today)))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn payment_unlocks_start() {
        let (catalog, gate) = fixtures();
        let mut app = App::new(&catalog, &gate);
        assert_eq!(app.screen(), Screen::Payment);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.screen(), Screen::Ready);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Board);
    }

    #[test]
    fn typing_and_winning() {
        let (catalog, gate) = fixtures();
        gate.record_paid_today().unwrap();
        let mut app = App::new(&catalog, &gate);
        press(&mut app, KeyCode::Char('s'));

        type_word(&mut app, "fra");
        assert_eq!(app.session.current_input(), "FRA");
        assert!(app.session.guesses().is_empty());

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        let messages = app.messages.len();
        type_word(&mut app, "frameq");
        assert_eq!(app.screen(), Screen::Finished);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_games, 1);
        // The overflow letter is dropped silently; only the win is reported
        assert_eq!(app.messages.len(), (messages + 1).min(5));
        assert!(gate.has_played_today());

        // Locked for the rest of the day
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen(), Screen::Finished);
    }

    #[test]
    fn free_mode_allows_another_game() {
        let (catalog, gate) = fixtures();
        gate.record_paid_today().unwrap();
        gate.set_free_mode(true).unwrap();
        let mut app = App::new(&catalog, &gate);
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "frame");
        assert_eq!(app.screen(), Screen::Finished);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen(), Screen::Board);
        assert!(app.session.guesses().is_empty());
    }

    #[test]
    fn played_lock_shows_locked_screen() {
        let (catalog, gate) = fixtures();
        gate.record_paid_today().unwrap();
        gate.record_played_today().unwrap();
        let app = App::new(&catalog, &gate);
        assert_eq!(app.screen(), Screen::Locked);
    }

    #[test]
    fn escape_quits() {
        let (catalog, gate) = fixtures();
        let mut app = App::new(&catalog, &gate);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
