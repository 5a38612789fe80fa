//! Puzzle sessions
//!
//! A [`GameSession`] owns one day's puzzle: the target, the guesses so far,
//! the in-progress input, and the `NotStarted → Playing → Won | Lost` state
//! machine.

mod session;
mod snapshot;

pub use session::{GameError, GameSession, GameStatus, MAX_GUESSES};
pub use snapshot::SessionSnapshot;
