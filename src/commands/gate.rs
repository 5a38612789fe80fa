//! Gate maintenance commands
//!
//! Stand-ins for the payment widget and the demo reset buttons.

use crate::gate::{DailyGate, DailyGateFacts, GateStatus};
use crate::output::{describe_gate, print_gate_status};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

/// Target state for the free-mode command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FreeModeSwitch {
    On,
    Off,
    Toggle,
}

#[derive(Serialize)]
struct StatusReport {
    today: NaiveDate,
    status: GateStatus,
    #[serde(flatten)]
    facts: DailyGateFacts,
}

/// Print the gate facts, optionally as JSON
///
/// # Errors
///
/// Returns an error if the JSON report cannot be serialized.
pub fn run_status(gate: &DailyGate, json: bool) -> Result<()> {
    let facts = gate.facts();
    let status = gate.status();

    if json {
        let report = StatusReport {
            today: gate.today(),
            status,
            facts,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_gate_status(&facts, status);
    }
    Ok(())
}

/// Record today's payment
///
/// # Errors
///
/// Returns an error if the payment cannot be persisted.
pub fn run_pay(gate: &DailyGate) -> Result<()> {
    gate.record_paid_today().context("failed to record payment")?;
    println!("{} Payment recorded for {}", "✓".green(), gate.today());
    println!("   {}", describe_gate(gate.status()));
    Ok(())
}

/// Forget today's payment
///
/// # Errors
///
/// Returns an error if the store cannot be updated.
pub fn run_reset_payment(gate: &DailyGate) -> Result<()> {
    gate.clear_paid_today().context("failed to reset payment")?;
    println!("{} Payment reset", "✓".green());
    Ok(())
}

/// Lift the played lock for today
///
/// # Errors
///
/// Returns an error if the store cannot be updated.
pub fn run_reset_played(gate: &DailyGate) -> Result<()> {
    gate.clear_played_today().context("failed to reset played lock")?;
    println!("{} Played lock cleared", "✓".green());
    println!("   {}", describe_gate(gate.status()));
    Ok(())
}

/// Switch free mode on, off, or flip it
///
/// # Errors
///
/// Returns an error if the flag cannot be persisted.
pub fn run_free_mode(gate: &DailyGate, switch: FreeModeSwitch) -> Result<()> {
    let enabled = match switch {
        FreeModeSwitch::On => gate.set_free_mode(true).map(|()| true),
        FreeModeSwitch::Off => gate.set_free_mode(false).map(|()| false),
        FreeModeSwitch::Toggle => gate.toggle_free_mode(),
    }
    .context("failed to update free mode")?;

    println!(
        "{} Free mode {}",
        "✓".green(),
        if enabled { "on".green() } else { "off".bright_black() }
    );
    Ok(())
}
