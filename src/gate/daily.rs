//! Daily play/payment gate
//!
//! Three persisted facts decide whether a player may start a puzzle today:
//! the date they last finished one, the date they last paid, and whether
//! free mode is on. Payment and the played lock are independent; free mode
//! lifts only the played lock.

use super::clock::Clock;
use super::store::{KeyValueStore, StoreError};
use chrono::NaiveDate;
use serde::Serialize;

/// Storage keys used by the gate
pub mod keys {
    pub const LAST_PLAYED_DATE: &str = "last-played-date";
    pub const LAST_PAID_DATE: &str = "last-paid-date";
    pub const FREE_MODE_ENABLED: &str = "free-mode-enabled";
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Snapshot of the persisted gate facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyGateFacts {
    pub last_played: Option<NaiveDate>,
    pub last_paid: Option<NaiveDate>,
    pub free_mode: bool,
}

/// Outcome of the combined gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GateStatus {
    /// No payment recorded for today
    NeedsPayment,
    /// Paid, but today's puzzle is already finished and free mode is off
    AlreadyPlayed,
    /// A new session may start
    Open,
}

/// Read/write façade over the persisted gate facts
///
/// Read failures are logged and treated as "fact absent", so a broken store
/// re-prompts for payment rather than granting or locking out play.
pub struct DailyGate {
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
}

impl DailyGate {
    pub fn new(store: impl KeyValueStore + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            store: Box::new(store),
            clock: Box::new(clock),
        }
    }

    /// Current calendar date according to the gate's clock
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    #[must_use]
    pub fn has_played_today(&self) -> bool {
        self.read_date(keys::LAST_PLAYED_DATE) == Some(self.today())
    }

    #[must_use]
    pub fn has_paid_today(&self) -> bool {
        self.read_date(keys::LAST_PAID_DATE) == Some(self.today())
    }

    /// Mark today's puzzle as finished
    ///
    /// # Errors
    /// Returns `StoreError` if the write cannot be persisted.
    pub fn record_played_today(&self) -> Result<(), StoreError> {
        self.write_today(keys::LAST_PLAYED_DATE)
    }

    /// Lift the played lock (demo reset)
    ///
    /// # Errors
    /// Returns `StoreError` if the removal cannot be persisted.
    pub fn clear_played_today(&self) -> Result<(), StoreError> {
        tracing::debug!("Clearing played lock");
        self.store.remove(keys::LAST_PLAYED_DATE)
    }

    /// Record a successful payment for today
    ///
    /// # Errors
    /// Returns `StoreError` if the write cannot be persisted.
    pub fn record_paid_today(&self) -> Result<(), StoreError> {
        self.write_today(keys::LAST_PAID_DATE)
    }

    /// Forget the recorded payment (demo reset)
    ///
    /// # Errors
    /// Returns `StoreError` if the removal cannot be persisted.
    pub fn clear_paid_today(&self) -> Result<(), StoreError> {
        tracing::debug!("Clearing payment");
        self.store.remove(keys::LAST_PAID_DATE)
    }

    #[must_use]
    pub fn is_free_mode_enabled(&self) -> bool {
        match self.store.load(keys::FREE_MODE_ENABLED) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!("Failed to read free mode flag: {}", e);
                false
            }
        }
    }

    /// # Errors
    /// Returns `StoreError` if the flag cannot be persisted.
    pub fn set_free_mode(&self, enabled: bool) -> Result<(), StoreError> {
        tracing::debug!("Setting free mode to {}", enabled);
        self.store
            .save(keys::FREE_MODE_ENABLED, if enabled { "true" } else { "false" })
    }

    /// Flip free mode, returning the new value
    ///
    /// # Errors
    /// Returns `StoreError` if the flag cannot be persisted.
    pub fn toggle_free_mode(&self) -> Result<bool, StoreError> {
        let enabled = !self.is_free_mode_enabled();
        self.set_free_mode(enabled)?;
        Ok(enabled)
    }

    /// Played lock only: true unless today's puzzle is finished, with free
    /// mode overriding the lock
    #[must_use]
    pub fn may_play_today(&self) -> bool {
        self.is_free_mode_enabled() || !self.has_played_today()
    }

    /// Combined gate: payment first, then the played lock
    #[must_use]
    pub fn status(&self) -> GateStatus {
        if !self.has_paid_today() {
            GateStatus::NeedsPayment
        } else if !self.may_play_today() {
            GateStatus::AlreadyPlayed
        } else {
            GateStatus::Open
        }
    }

    #[must_use]
    pub fn facts(&self) -> DailyGateFacts {
        DailyGateFacts {
            last_played: self.read_date(keys::LAST_PLAYED_DATE),
            last_paid: self.read_date(keys::LAST_PAID_DATE),
            free_mode: self.is_free_mode_enabled(),
        }
    }

    fn read_date(&self, key: &str) -> Option<NaiveDate> {
        let value = match self.store.load(key) {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", key, e);
                return None;
            }
        };

        match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::warn!("Ignoring malformed {} value '{}': {}", key, value, e);
                None
            }
        }
    }

    fn write_today(&self, key: &str) -> Result<(), StoreError> {
        let today = self.today();
        tracing::debug!("Recording {} = {}", key, today);
        self.store.save(key, &today.format(DATE_FORMAT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::super::clock::FixedClock;
    use super::super::store::{FileStore, MemoryStore};
    use super::*;
    use std::sync::Arc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn gate_on(d: u32) -> DailyGate {
        DailyGate::new(MemoryStore::new(), FixedClock(day(d)))
    }

    /// Store shared between gates so a test can move the clock
    #[derive(Clone, Default)]
    struct SharedStore(Arc<MemoryStore>);

    impl KeyValueStore for SharedStore {
        fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.load(key)
        }
        fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.save(key, value)
        }
        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.0.remove(key)
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Poisoned)
        }
        fn save(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    #[test]
    fn fresh_gate_needs_payment() {
        let gate = gate_on(15);
        assert!(!gate.has_played_today());
        assert!(!gate.has_paid_today());
        assert!(!gate.is_free_mode_enabled());
        assert!(gate.may_play_today());
        assert_eq!(gate.status(), GateStatus::NeedsPayment);
    }

    #[test]
    fn paid_and_unplayed_is_open() {
        let gate = gate_on(15);
        gate.record_paid_today().unwrap();
        assert!(gate.has_paid_today());
        assert_eq!(gate.status(), GateStatus::Open);
    }

    #[test]
    fn played_today_locks_gate() {
        let gate = gate_on(15);
        gate.record_paid_today().unwrap();
        gate.record_played_today().unwrap();
        assert!(gate.has_played_today());
        assert!(!gate.may_play_today());
        assert_eq!(gate.status(), GateStatus::AlreadyPlayed);
    }

    #[test]
    fn record_played_is_idempotent() {
        let gate = gate_on(15);
        gate.record_played_today().unwrap();
        gate.record_played_today().unwrap();
        assert!(gate.has_played_today());
        assert_eq!(gate.facts().last_played, Some(day(15)));
    }

    #[test]
    fn free_mode_overrides_played_lock_only() {
        let gate = gate_on(15);
        gate.record_played_today().unwrap();
        gate.set_free_mode(true).unwrap();
        assert!(gate.may_play_today());
        // Payment is still required
        assert_eq!(gate.status(), GateStatus::NeedsPayment);

        gate.record_paid_today().unwrap();
        assert_eq!(gate.status(), GateStatus::Open);
    }

    #[test]
    fn toggle_free_mode_flips_flag() {
        let gate = gate_on(15);
        assert!(gate.toggle_free_mode().unwrap());
        assert!(gate.is_free_mode_enabled());
        assert!(!gate.toggle_free_mode().unwrap());
        assert!(!gate.is_free_mode_enabled());
    }

    #[test]
    fn clear_paid_resets_payment() {
        let gate = gate_on(15);
        gate.record_paid_today().unwrap();
        gate.clear_paid_today().unwrap();
        assert!(!gate.has_paid_today());
        assert_eq!(gate.facts().last_paid, None);
    }

    #[test]
    fn clear_played_lifts_lock() {
        let gate = gate_on(15);
        gate.record_played_today().unwrap();
        gate.clear_played_today().unwrap();
        assert!(!gate.has_played_today());
    }

    #[test]
    fn facts_expire_on_next_day() {
        let store = SharedStore::default();
        let monday = DailyGate::new(store.clone(), FixedClock(day(12)));
        monday.record_paid_today().unwrap();
        monday.record_played_today().unwrap();

        let tuesday = DailyGate::new(store, FixedClock(day(13)));
        assert!(!tuesday.has_paid_today());
        assert!(!tuesday.has_played_today());
        assert_eq!(tuesday.facts().last_played, Some(day(12)));
        assert_eq!(tuesday.status(), GateStatus::NeedsPayment);
    }

    #[test]
    fn facts_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let gate = DailyGate::new(FileStore::open(&path), FixedClock(day(15)));
        gate.record_paid_today().unwrap();
        gate.record_played_today().unwrap();
        gate.set_free_mode(true).unwrap();
        let before = (gate.has_played_today(), gate.has_paid_today(), gate.facts());
        drop(gate);

        let reloaded = DailyGate::new(FileStore::open(&path), FixedClock(day(15)));
        assert_eq!(
            (
                reloaded.has_played_today(),
                reloaded.has_paid_today(),
                reloaded.facts()
            ),
            before
        );
    }

    #[test]
    fn dates_are_stored_as_iso_strings() {
        let store = SharedStore::default();
        let gate = DailyGate::new(store.clone(), FixedClock(day(5)));
        gate.record_paid_today().unwrap();
        assert_eq!(
            store.load(keys::LAST_PAID_DATE).unwrap().as_deref(),
            Some("2026-10-05")
        );
    }

    #[test]
    fn malformed_values_read_as_absent() {
        let store = SharedStore::default();
        store.save(keys::LAST_PLAYED_DATE, "Thu Oct 15 2026").unwrap();
        store.save(keys::FREE_MODE_ENABLED, "yes").unwrap();

        let gate = DailyGate::new(store, FixedClock(day(15)));
        assert!(!gate.has_played_today());
        assert!(!gate.is_free_mode_enabled());
    }

    #[test]
    fn broken_store_degrades_to_needs_payment() {
        let gate = DailyGate::new(BrokenStore, FixedClock(day(15)));
        assert!(!gate.has_played_today());
        assert!(!gate.has_paid_today());
        assert!(gate.may_play_today());
        assert_eq!(gate.status(), GateStatus::NeedsPayment);
        assert!(gate.record_paid_today().is_err());
    }

    #[test]
    fn failed_payment_write_still_needs_payment() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be written as the store file
        let gate = DailyGate::new(FileStore::open(dir.path()), FixedClock(day(15)));
        assert!(gate.record_paid_today().is_err());
        assert!(!gate.has_paid_today());
        assert_eq!(gate.status(), GateStatus::NeedsPayment);
    }

    #[test]
    fn facts_serialize_with_iso_dates() {
        let gate = gate_on(15);
        gate.record_paid_today().unwrap();
        let json = serde_json::to_value(gate.facts()).unwrap();
        assert_eq!(json["last_paid"], "2026-10-15");
        assert!(json["last_played"].is_null());
        assert_eq!(json["free_mode"], false);
    }
}
