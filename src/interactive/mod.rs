//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Screen, Statistics, run_tui};
