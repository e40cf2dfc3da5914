//! Display functions for the interactive game

use super::art;
use super::formatters::{capitalize, guessed_line};
use crate::core::{Difficulty, Round};
use crate::scores::ScoreRecord;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io;
use std::thread;
use std::time::Duration;

/// Clear the terminal and move the cursor home
///
/// Failures are ignored: a terminal that cannot clear still gets the next
/// frame printed below the old one.
pub fn clear_screen() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

/// Cosmetic delay between messages
///
/// Presentation only; game state never depends on it.
pub fn pause(duration: Duration) {
    thread::sleep(duration);
}

/// Print the welcome screen with the game rules
pub fn print_welcome() {
    clear_screen();
    println!("{}", "WELCOME TO GALLOWS!".bright_magenta().bold());
    println!("{}", "==========================".cyan());
    println!("{}", "How to play:".blue());
    println!("1. Choose a category and difficulty level");
    println!("2. Guess letters to reveal the hidden word");
    println!("3. You win if you guess the word before the figure is complete");
    println!("4. You lose if the figure is complete before you guess the word");
    println!("{}", "==========================".cyan());
    println!();
}

/// Print the current round state: gallows, category, attempts, word
pub fn print_round(round: &Round, category: &str) {
    clear_screen();

    println!("{}", art::stage(round.wrong_count()).blue());

    println!("\n{}", format!("Category: {}", capitalize(category)).cyan());
    println!("Attempts remaining: {}", round.attempts_left());

    let guessed = guessed_line(round);
    if !guessed.is_empty() {
        println!("Letters guessed: {guessed}");
    }

    println!("\nWord: {}", colored_masked_word(round));
}

/// The hidden word with revealed letters in green
fn colored_masked_word(round: &Round) -> String {
    let rendered: Vec<String> = round
        .word()
        .chars()
        .map(|ch| {
            if round.is_revealed(ch) {
                ch.to_string().green().to_string()
            } else {
                "_".to_string()
            }
        })
        .collect();
    rendered.join(" ")
}

/// Print the win banner and score
pub fn print_win(word: &str, score: u32) {
    println!(
        "\n{}",
        format!("Congratulations! You guessed the word: {word}")
            .green()
            .bold()
    );
    println!("Your score: {}", score.to_string().bright_yellow().bold());
}

/// Print the new-high-score callout
pub fn print_new_high_score(difficulty: Difficulty) {
    println!(
        "{}",
        format!("New high score for {difficulty} difficulty!").bold()
    );
}

/// Print the loss banner, revealing the word
pub fn print_loss(word: &str) {
    println!(
        "\n{}",
        format!("Game Over! The word was: {word}").red().bold()
    );
}

/// Print the abort message, revealing the word
pub fn print_abort(word: &str) {
    println!("{}", format!("Game aborted. The word was: {word}").yellow());
}

/// Print the revealed hint letter
pub fn print_hint(letter: char) {
    println!("{}", format!("Hint: Try the letter '{letter}'").cyan());
}

/// Print the high-score table
pub fn print_high_scores(record: &ScoreRecord) {
    println!("{}", "HIGH SCORES".bright_magenta().bold());
    println!("{}", "====================".cyan());

    for difficulty in Difficulty::ALL {
        println!(
            "{}: {}",
            capitalize(difficulty.name()),
            record.get(difficulty)
        );
    }

    println!("{}", "====================".cyan());
}

/// Print a recoverable-problem message
pub fn warn(message: &str) {
    println!("{}", message.yellow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Round, Word};

    #[test]
    fn colored_masked_word_keeps_blanks_plain() {
        let round = Round::new(Word::new("mango").unwrap(), Difficulty::Hard);
        // No color codes before anything is revealed
        assert_eq!(colored_masked_word(&round), "_ _ _ _ _");
    }
}
