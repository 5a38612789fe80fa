//! Terminal output formatting
//!
//! Colored boards, keyboards and status cards for the line-based front end.

pub mod display;
pub mod formatters;

pub use display::{describe_gate, print_board, print_gate_status, print_keyboard, print_result};
