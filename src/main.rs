//! Countrdle - CLI
//!
//! Country guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countrdle::{
    commands::{measure_distance, run_simple, search_countries},
    game::GameSession,
    logging::{LogTarget, init_logging},
    output::{print_distance, print_suggestions},
    roster::{RosterSource, load_roster_reporting},
};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Parser)]
#[command(
    name = "countrdle",
    about = "Guess the hidden country from clues, bearings and distances",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Roster: 'online' (default, falls back to embedded), 'embedded', or path to a JSON file
    #[arg(short, long, global = true, default_value = "online", env = "COUNTRDLE_ROSTER")]
    roster: String,

    /// Seed for reproducible target picks
    #[arg(long, global = true, env = "COUNTRDLE_SEED", conflicts_with = "daily")]
    seed: Option<u64>,

    /// Same country for everyone today (seeded from the UTC date)
    #[arg(long, global = true)]
    daily: bool,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long, global = true, env = "COUNTRDLE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// List countries whose name contains the query
    Search {
        /// Text to search for
        query: String,

        /// Show every match instead of the first 8
        #[arg(short, long)]
        all: bool,
    },

    /// Show direction and distance between two countries
    Distance {
        /// Country guessed
        from: String,

        /// Country to point at
        to: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let owns_terminal = matches!(command, Commands::Play);
    init_logging(LogTarget::choose(cli.log_file.as_deref(), owns_terminal))?;

    let loaded = load_roster_reporting(&RosterSource::from_name(&cli.roster))
        .with_context(|| format!("could not load roster '{}'", cli.roster))?;
    let fallback_reason = loaded.fallback_reason;
    let roster = loaded.countries;

    match command {
        Commands::Play => {
            use countrdle::interactive::{App, run_tui};

            let session = start_session(cli.seed, cli.daily, roster)?;
            let mut app = App::new(session);
            if let Some(reason) = &fallback_reason {
                app.notify_roster_fallback(reason);
            }
            run_tui(app)
        }
        Commands::Simple => {
            let mut session = start_session(cli.seed, cli.daily, roster)?;
            run_simple(&mut session).context("line-mode game failed")
        }
        Commands::Search { query, all } => {
            let result = search_countries(&roster, &query, all);
            println!(
                "\n{} {} for '{}':",
                result.total,
                if result.total == 1 { "match" } else { "matches" },
                result.query
            );
            print_suggestions(&result.shown, result.total);
            Ok(())
        }
        Commands::Distance { from, to } => {
            let result = measure_distance(&roster, &from, &to).map_err(|e| anyhow::anyhow!(e))?;
            print_distance(result.from, result.to, result.feedback);
            Ok(())
        }
    }
}

fn start_session(
    seed: Option<u64>,
    daily: bool,
    roster: Vec<countrdle::core::Country>,
) -> Result<GameSession> {
    let mut session = match (seed, daily) {
        (Some(seed), _) => GameSession::with_seed(seed),
        (None, true) => GameSession::with_seed(daily_seed()?),
        (None, false) => GameSession::new(),
    };
    session.start(roster)?;
    Ok(session)
}

/// Days since the Unix epoch, so the pick changes at UTC midnight
fn daily_seed() -> Result<u64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before 1970")?;
    Ok(elapsed.as_secs() / SECONDS_PER_DAY)
}
