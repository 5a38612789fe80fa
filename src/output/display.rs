//! Display functions for game and gate state

use super::formatters::{
    KEYBOARD_ROWS, colored_tile, feedback_row, keyboard_row_plain, pending_row,
};
use crate::game::{GameStatus, SessionSnapshot};
use crate::gate::{DailyGateFacts, GateStatus};
use colored::Colorize;

/// Print the board: scored rows, the input row, then blank rows
pub fn print_board(snapshot: &SessionSnapshot) {
    println!();
    for row in &snapshot.rows {
        println!("    {}", feedback_row(row));
    }
    let mut drawn = snapshot.rows.len();
    if snapshot.current_row().is_some() {
        println!("    {}", pending_row(&snapshot.current_input));
        drawn += 1;
    }
    for _ in drawn..snapshot.max_guesses {
        println!("    {}", pending_row(""));
    }
    println!();
}

/// Print the on-screen keyboard colored by letter status
///
/// Falls back to bracket markers when color output is disabled.
pub fn print_keyboard(snapshot: &SessionSnapshot) {
    let colorize = colored::control::SHOULD_COLORIZE.should_colorize();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = if colorize {
            row.chars()
                .map(|letter| {
                    colored_tile(letter, snapshot.letter_statuses.status(letter)).to_string()
                })
                .collect()
        } else {
            keyboard_row_plain(row, &snapshot.letter_statuses)
        };
        println!("  {}{}", " ".repeat(indent * 2), keys);
    }
    println!();
}

/// Print the end-of-game card
pub fn print_result(snapshot: &SessionSnapshot, share_grid: Option<&str>) {
    println!("{}", "═".repeat(40).bright_cyan());
    match snapshot.status {
        GameStatus::Won => {
            println!("  {}", "🎉 Congratulations!".bright_green().bold());
            println!(
                "  Solved in {} {}",
                snapshot.guesses.len().to_string().bright_cyan().bold(),
                if snapshot.guesses.len() == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            );
        }
        GameStatus::Lost => {
            println!("  {}", "Game Over".bright_red().bold());
            if let Some(target) = &snapshot.revealed_target {
                println!("  The word was: {}", target.text().bright_yellow().bold());
            }
        }
        GameStatus::NotStarted | GameStatus::Playing => {}
    }
    if let Some(grid) = share_grid {
        println!();
        for line in grid.lines() {
            println!("  {line}");
        }
    }
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print the gate facts and what they allow
pub fn print_gate_status(facts: &DailyGateFacts, status: GateStatus) {
    let date = |d: Option<chrono::NaiveDate>| {
        d.map_or_else(|| "never".bright_black().to_string(), |d| d.to_string())
    };

    println!("\n{}", "─".repeat(40).cyan());
    println!(" {}", "GOOBIE DAILY GATE".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("   Last played:  {}", date(facts.last_played));
    println!("   Last paid:    {}", date(facts.last_paid));
    println!(
        "   Free mode:    {}",
        if facts.free_mode {
            "on".green()
        } else {
            "off".bright_black()
        }
    );
    println!();
    println!("   {}", describe_gate(status));
}

/// One-line explanation of a gate status
#[must_use]
pub fn describe_gate(status: GateStatus) -> String {
    match status {
        GateStatus::NeedsPayment => format!(
            "{} Pay 1 USDC to play today's puzzle (`goobie pay`)",
            "●".yellow()
        ),
        GateStatus::AlreadyPlayed => format!(
            "{} Already played. Come back tomorrow for a new puzzle!",
            "●".red()
        ),
        GateStatus::Open => format!("{} Today's puzzle is ready", "●".green()),
    }
}
