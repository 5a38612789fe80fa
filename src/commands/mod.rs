//! Command implementations

pub mod gate;
pub mod simple;

pub use gate::{
    FreeModeSwitch, run_free_mode, run_pay, run_reset_payment, run_reset_played, run_status,
};
pub use simple::run_simple;
