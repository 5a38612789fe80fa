//! Goobie
//!
//! A daily five-letter word guessing game with a pay-to-play gate.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use goobie::game::{GameSession, GameStatus};
//! use goobie::gate::{DailyGate, MemoryStore, SystemClock};
//! use goobie::wordlists::WordCatalog;
//!
//! let catalog = WordCatalog::embedded();
//! let gate = DailyGate::new(MemoryStore::new(), SystemClock);
//! gate.record_paid_today().unwrap();
//!
//! let mut session = GameSession::new(&catalog, &gate);
//! session.start().unwrap();
//! session.submit_guess("crane");
//! assert_eq!(session.guesses().len(), 1);
//! ```

// Core domain types
pub mod core;

// Puzzle sessions
pub mod game;

// Daily play/payment gate
pub mod gate;

// Word catalog
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
