//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::game::{GameSession, GuessOutcome, SUGGESTION_LIMIT};
use crate::output::{print_clues, print_guesses, print_suggestions, print_win};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    Help,
    Suggest(String),
    Guess(String),
}

impl Command {
    /// Commands start with `:` so they never shadow a country name
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            ":q" | ":quit" | ":exit" => Self::Quit,
            ":n" | ":new" | ":restart" => Self::Restart,
            ":h" | ":help" => Self::Help,
            _ => line
                .strip_prefix('?')
                .map_or_else(|| Self::Guess(line.to_string()), |q| Self::Suggest(q.trim().to_string())),
        }
    }
}

/// Run the simple interactive CLI mode on a started session
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(session: &mut GameSession) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Countrdle - Guess the Country                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_clues(session);
        print_guesses(session);

        if session.is_won() {
            print_win(session);
            let Some(answer) = prompt(&mut lines, "Play again? (yes/no)")? else {
                break;
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                restart(session);
                continue;
            }
            break;
        }

        let Some(line) = prompt(&mut lines, "\nGuess a country")? else {
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Restart => restart(session),
            Command::Help => print_help(),
            Command::Suggest(query) => {
                let found = session.search(&query);
                let shown = found.len().min(SUGGESTION_LIMIT);
                print_suggestions(&found[..shown], found.len());
            }
            Command::Guess(query) => report_outcome(&session.submit_guess(&query)),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn restart(session: &mut GameSession) {
    match session.restart() {
        Ok(()) => println!("\n🔄 New country picked!\n"),
        Err(err) => println!("{}", err.to_string().red()),
    }
}

fn report_outcome(outcome: &GuessOutcome) {
    match outcome {
        GuessOutcome::Unmatched => println!("{}", "No country matches that, try again.".red()),
        GuessOutcome::AlreadyGuessed(name) => {
            println!("{}", format!("You already guessed {name}.").yellow());
        }
        GuessOutcome::Miss { country, revealed } => {
            let hint = revealed.map_or_else(
                || "no clues left".to_string(),
                |category| format!("new clue: {category}"),
            );
            println!("{} {}", format!("✗ Not {country}").red().bold(), format!("({hint})").bright_black());
        }
        GuessOutcome::Correct { .. } | GuessOutcome::NotStarted | GuessOutcome::AlreadyWon => {}
    }
}

fn print_help() {
    println!("Each wrong guess reveals one more clue about the hidden country,");
    println!("and shows which way and how far it lies from your guess.\n");
    println!("  - Type a country name (partial names work) and press Enter");
    println!("  - '?text' lists up to {SUGGESTION_LIMIT} matching countries");
    println!("  - ':new' picks a new country, ':quit' exits, ':help' shows this");
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, text: &str) -> io::Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush()?;

    lines
        .next()
        .transpose()
        .map(|line| line.map(|l| l.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_parse_commands() {
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(" :QUIT "), Command::Quit);
        assert_eq!(Command::parse(":new"), Command::Restart);
        assert_eq!(Command::parse(":help"), Command::Help);
    }

    #[test]
    fn command_parse_country_names_are_guesses() {
        assert_eq!(Command::parse("New Zealand"), Command::Guess("New Zealand".to_string()));
        assert_eq!(Command::parse("new"), Command::Guess("new".to_string()));
        assert_eq!(Command::parse("  quit "), Command::Guess("quit".to_string()));
    }

    #[test]
    fn command_parse_suggest() {
        assert_eq!(Command::parse("?guin"), Command::Suggest("guin".to_string()));
        assert_eq!(Command::parse("? "), Command::Suggest(String::new()));
    }
}
