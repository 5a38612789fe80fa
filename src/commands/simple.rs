//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use crate::game::{GameError, GameSession, GameStatus, MAX_GUESSES};
use crate::gate::{DailyGate, GateStatus};
use crate::output::{describe_gate, print_board, print_keyboard, print_result};
use crate::wordlists::WordCatalog;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(catalog: &WordCatalog, gate: &DailyGate) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║                    Goobie                    ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Guess the 5-letter word in {MAX_GUESSES} tries.");
    println!("Commands: 'keys' to show the keyboard, 'quit' to exit\n");

    let status = gate.status();
    if status != GateStatus::Open {
        println!("{}\n", describe_gate(status));
        return Ok(());
    }

    let mut session = GameSession::new(catalog, gate);

    loop {
        match session.start() {
            Ok(()) => {}
            Err(GameError::AlreadyPlayedToday) => {
                println!("{}\n", describe_gate(GateStatus::AlreadyPlayed));
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        if !play_round(&mut session)? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        let snapshot = session.snapshot();
        print_board(&snapshot);
        print_result(&snapshot, session.share_grid().as_deref());

        if !gate.is_free_mode_enabled() {
            println!("\nCome back tomorrow for a new puzzle!\n");
            return Ok(());
        }

        match get_user_input("Free mode is on. Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                session.reset();
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Play until the session is won or lost; `false` if the player quit
fn play_round(session: &mut GameSession<'_>) -> Result<bool> {
    while session.status() == GameStatus::Playing {
        print_board(&session.snapshot());

        let turn = session.guesses().len() + 1;
        let input = get_user_input(&format!("Guess {turn} of {MAX_GUESSES}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(false),
            "keys" | "k" => print_keyboard(&session.snapshot()),
            _ => {
                if !session.submit_guess(&input) {
                    println!("{}", "❌ Enter exactly 5 letters".red());
                }
            }
        }
    }
    Ok(true)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
