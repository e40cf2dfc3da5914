//! Main menu and selection prompts
//!
//! Line-oriented stdin/stdout loops. Every invalid input re-prompts with a
//! warning; nothing here can crash the process.

use crate::core::Difficulty;
use crate::output::display;
use crate::output::formatters::capitalize;
use crate::scores::ScoreStore;
use crate::wordbank::{CATEGORIES, Category};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::time::Duration;

/// Read one trimmed line from stdin
///
/// # Errors
/// Returns an I/O error if stdin or stdout is unavailable.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Parse a 1-based menu choice
///
/// Returns `None` for non-numeric input or anything outside `1..=max`.
#[must_use]
pub fn parse_menu_choice(input: &str, max: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&choice| (1..=max).contains(&choice))
}

/// Welcome screen followed by the main menu loop
///
/// # Errors
/// Returns an error only when stdin or stdout fails.
pub fn run_menu(store: &ScoreStore, rng: &mut impl Rng) -> Result<()> {
    display::print_welcome();
    read_line("Press Enter to continue")?;

    loop {
        display::clear_screen();
        println!("{}", "GALLOWS".bright_magenta().bold());
        println!("{}", "====================".cyan());
        println!("1. Play Game");
        println!("2. View High Scores");
        println!("3. Exit");
        println!("{}", "====================".cyan());

        let choice = read_line("\nEnter your choice (1-3)")?;
        match parse_menu_choice(&choice, 3) {
            Some(1) => super::play::run_play(store, rng)?,
            Some(2) => {
                display::clear_screen();
                super::scores::run_scores(store);
                read_line("\nPress Enter to continue")?;
            }
            Some(3) => {
                display::clear_screen();
                println!("{}", "Thanks for playing Gallows! Goodbye!".green());
                return Ok(());
            }
            _ => {
                display::warn("Invalid choice. Please enter 1, 2, or 3.");
                display::pause(Duration::from_secs(1));
            }
        }
    }
}

/// Let the player pick a word category
///
/// # Errors
/// Returns an I/O error if stdin or stdout is unavailable.
pub fn select_category() -> io::Result<&'static Category> {
    display::clear_screen();
    println!("{}", "Select a Word Category:".bright_magenta().bold());
    for (i, category) in CATEGORIES.iter().enumerate() {
        println!("{}. {}", i + 1, capitalize(category.name()));
    }

    loop {
        let input = read_line(&format!("\nEnter your choice (1-{})", CATEGORIES.len()))?;
        match parse_menu_choice(&input, CATEGORIES.len()) {
            Some(choice) => return Ok(&CATEGORIES[choice - 1]),
            None => display::warn(&format!(
                "Invalid choice. Please enter a number between 1 and {}.",
                CATEGORIES.len()
            )),
        }
    }
}

/// Let the player pick a difficulty level
///
/// # Errors
/// Returns an I/O error if stdin or stdout is unavailable.
pub fn select_difficulty() -> io::Result<Difficulty> {
    display::clear_screen();
    println!("{}", "Select Difficulty Level:".bright_magenta().bold());
    for (i, level) in Difficulty::ALL.iter().enumerate() {
        let hints = if level.hint_allowed() {
            "hints available"
        } else {
            "no hints"
        };
        println!(
            "{}. {} ({} wrong guesses allowed, {hints})",
            i + 1,
            capitalize(level.name()),
            level.max_wrong()
        );
    }

    loop {
        let input = read_line("\nEnter your choice (1-3)")?;
        match parse_menu_choice(&input, Difficulty::ALL.len()).and_then(Difficulty::from_index) {
            Some(level) => return Ok(level),
            None => display::warn("Invalid choice. Please enter 1, 2, or 3."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choice_accepts_range() {
        assert_eq!(parse_menu_choice("1", 3), Some(1));
        assert_eq!(parse_menu_choice("3", 3), Some(3));
        assert_eq!(parse_menu_choice(" 2 ", 3), Some(2));
    }

    #[test]
    fn menu_choice_rejects_out_of_range() {
        assert_eq!(parse_menu_choice("0", 3), None);
        assert_eq!(parse_menu_choice("4", 3), None);
    }

    #[test]
    fn menu_choice_rejects_non_numeric() {
        assert_eq!(parse_menu_choice("", 3), None);
        assert_eq!(parse_menu_choice("two", 3), None);
        assert_eq!(parse_menu_choice("1.5", 3), None);
        assert_eq!(parse_menu_choice("-1", 3), None);
    }
}
