//! Goobie - CLI
//!
//! Daily word guessing game with TUI and line-based modes, plus gate
//! maintenance commands standing in for the payment widget.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use goobie::{
    commands::{
        FreeModeSwitch, run_free_mode, run_pay, run_reset_payment, run_reset_played, run_simple,
        run_status,
    },
    gate::{DailyGate, FileStore, MemoryStore, SystemClock},
    wordlists::WordCatalog,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "goobie",
    about = "Goobie: guess the 5-letter word in 6 tries, once a day",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Store file for the daily gate (default: platform config dir)
    #[arg(long, global = true, env = "GOOBIE_STORE", conflicts_with = "memory")]
    store: Option<PathBuf>,

    /// Keep gate facts in memory only (nothing is saved)
    #[arg(long, global = true)]
    memory: bool,

    /// Custom word catalog, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true, env = "GOOBIE_WORDS")]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show today's gate status
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record today's payment
    Pay,

    /// Forget today's payment (demo reset)
    ResetPayment,

    /// Clear the played-today lock
    ResetPlayed,

    /// Turn free mode on or off
    FreeMode {
        #[arg(value_enum, default_value = "toggle")]
        switch: FreeModeSwitch,
    },
}

/// Load the word catalog based on the -w flag
fn load_catalog(words: Option<&Path>) -> Result<WordCatalog> {
    match words {
        Some(path) => WordCatalog::from_file(path)
            .with_context(|| format!("failed to load word catalog {}", path.display())),
        None => Ok(WordCatalog::embedded()),
    }
}

/// Open the gate over the configured store
fn open_gate(store: Option<PathBuf>, memory: bool) -> DailyGate {
    if memory {
        tracing::debug!("Using in-memory store");
        return DailyGate::new(MemoryStore::new(), SystemClock);
    }
    let path = store.unwrap_or_else(FileStore::default_path);
    DailyGate::new(FileStore::open(path), SystemClock)
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would paint over the TUI's alternate screen
    init_logging(if matches!(command, Commands::Play) {
        "off"
    } else {
        "goobie=warn"
    });

    let gate = open_gate(cli.store, cli.memory);

    match command {
        Commands::Play => {
            let catalog = load_catalog(cli.words.as_deref())?;
            run_play_command(&catalog, &gate)
        }
        Commands::Simple => {
            let catalog = load_catalog(cli.words.as_deref())?;
            run_simple(&catalog, &gate)
        }
        Commands::Status { json } => run_status(&gate, json),
        Commands::Pay => run_pay(&gate),
        Commands::ResetPayment => run_reset_payment(&gate),
        Commands::ResetPlayed => run_reset_played(&gate),
        Commands::FreeMode { switch } => run_free_mode(&gate, switch),
    }
}

fn run_play_command(catalog: &WordCatalog, gate: &DailyGate) -> Result<()> {
    use goobie::interactive::{App, run_tui};

    let app = App::new(catalog, gate);
    run_tui(app)
}
