//! Display functions for the line-mode game and lookup commands

use super::formatters::{create_progress_bar, feedback_cell, format_distance};
use crate::core::{CLUE_ORDER, Country};
use crate::game::{Feedback, GameSession};
use colored::Colorize;

/// Print every clue box, revealed or not
pub fn print_clues(session: &GameSession) {
    let revealed = session.revealed_clues().len();
    println!(
        "\n{} [{}] {}/{}",
        "Clues".bright_cyan().bold(),
        create_progress_bar(revealed, CLUE_ORDER.len(), CLUE_ORDER.len()).cyan(),
        revealed,
        CLUE_ORDER.len()
    );

    for category in CLUE_ORDER {
        let value = session.clue_value(category);
        let shown = if value.is_hidden() {
            value.to_string().bright_black()
        } else {
            value.to_string().bright_yellow().bold()
        };
        println!("   {:<11} {shown}", format!("{category}:"));
    }
}

/// Print the guessed countries with direction and distance to the target
pub fn print_guesses(session: &GameSession) {
    let guessed = session.guessed_countries();
    if guessed.is_empty() {
        return;
    }

    println!("\n{}", "Guesses".bright_cyan().bold());
    for (i, country) in guessed.iter().enumerate() {
        let feedback = session.feedback_for(country);
        let cell = feedback_cell(feedback);
        let cell = if feedback.is_some() {
            cell.yellow()
        } else {
            cell.green().bold()
        };
        println!(
            "   {}. {:<32} {cell}",
            (i + 1).to_string().bright_black(),
            country.to_string()
        );
    }
}

/// Print the win banner
pub fn print_win(session: &GameSession) {
    let Some(target) = session.revealed_target() else {
        return;
    };
    let tries = session.tries();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "   🥳  You guessed it!  🥳".bright_green().bold());
    println!(
        "   {} in {} {}",
        target.to_string().bright_white().bold(),
        tries.to_string().bright_cyan().bold(),
        if tries == 1 { "try" } else { "tries" }
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print autocomplete results, noting how many were left out
pub fn print_suggestions(shown: &[&Country], total: usize) {
    if shown.is_empty() {
        println!("{}", "No matching countries".red());
        return;
    }

    for country in shown {
        println!("  • {country}");
    }
    if total > shown.len() {
        println!(
            "{}",
            format!("  … and {} more", total - shown.len()).bright_black()
        );
    }
}

/// Print how far and in which direction `to` lies from `from`
pub fn print_distance(from: &Country, to: &Country, feedback: Feedback) {
    println!(
        "\n{} {} {}",
        from.to_string().bright_white().bold(),
        "→".bright_black(),
        to.to_string().bright_white().bold()
    );
    println!(
        "   Distance:  {}",
        format_distance(feedback.distance_km).bright_yellow().bold()
    );
    println!(
        "   Direction: {} {}",
        feedback.bearing.arrow().to_string().bright_yellow().bold(),
        feedback.bearing.label()
    );
}
