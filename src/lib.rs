//! Countrdle
//!
//! A country guessing game: each wrong guess reveals one more clue about the
//! hidden country and shows which way and how far it lies from the guess.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use countrdle::game::{GameSession, GuessOutcome};
//! use countrdle::roster::{RosterSource, load_roster};
//!
//! let roster = load_roster(&RosterSource::Embedded).unwrap();
//! let mut session = GameSession::with_seed(42);
//! session.start(roster).unwrap();
//!
//! if let GuessOutcome::Miss { country, revealed } = session.submit_guess("france") {
//!     println!("Not {country}, new clue: {revealed:?}");
//! }
//! ```

// Core domain types
pub mod core;

// Game rules and session state
pub mod game;

// Country data sources
pub mod roster;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log setup
pub mod logging;
