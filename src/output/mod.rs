//! Terminal output formatting
//!
//! Display utilities for the line-mode game and lookup commands.

pub mod display;
pub mod formatters;

pub use display::{print_clues, print_distance, print_guesses, print_suggestions, print_win};
