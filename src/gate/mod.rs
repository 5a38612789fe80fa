//! Daily gate: persisted played/paid/free-mode facts
//!
//! The gate is consulted before a session starts and written when a session
//! finishes or a payment is reported.

mod clock;
mod daily;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use daily::{DailyGate, DailyGateFacts, GateStatus, keys};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
