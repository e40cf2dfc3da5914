//! One round of hangman
//!
//! Render state, read one token, apply the engine transition, repeat. The
//! engine owns the rules; this loop owns the prompts and pacing.

use super::menu;
use crate::core::{Outcome, Round};
use crate::output::display;
use crate::scores::ScoreStore;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::time::Duration;

/// Play rounds until the player declines another
///
/// # Errors
/// Returns an error only when stdin or stdout fails.
pub fn run_play(store: &ScoreStore, rng: &mut impl Rng) -> Result<()> {
    loop {
        play_round(store, rng)?;

        let again = menu::read_line("\nPlay again? (y/n)")?;
        if !again.to_lowercase().starts_with('y') {
            return Ok(());
        }
    }
}

/// One full round: category and difficulty selection through to the epilogue
fn play_round(store: &ScoreStore, rng: &mut impl Rng) -> Result<()> {
    let category = menu::select_category()?;
    let difficulty = menu::select_difficulty()?;

    let word = category.random_word(rng);
    let mut round = Round::new(word, difficulty);

    loop {
        display::print_round(&round, category.name());

        println!("\nOptions:");
        println!("- Enter a letter to guess");
        if round.hint_available() {
            println!("- Enter '?' for a hint (can be used once)");
        }
        println!("- Enter '!' to quit the round");

        let input = menu::read_line("\nYour choice")?.to_lowercase();

        match input.as_str() {
            "!" => {
                let word = round.abort().text().to_string();
                display::print_abort(&word);
                display::pause(Duration::from_secs(2));
                return Ok(());
            }
            "?" => {
                match round.request_hint(rng) {
                    Ok(Some(letter)) => display::print_hint(letter),
                    Ok(None) => display::warn("Every letter is already on the board."),
                    Err(err) => display::warn(&err.to_string()),
                }
                display::pause(Duration::from_secs(2));
            }
            guess => {
                let misses_before = round.wrong_count();
                match round.submit_guess(guess) {
                    Ok(Outcome::Continue) => {
                        if round.wrong_count() > misses_before {
                            println!("{}", "Wrong guess!".red());
                        } else {
                            println!("{}", "Good guess!".green());
                        }
                        display::pause(Duration::from_secs(1));
                    }
                    Ok(Outcome::Won) => {
                        display::print_round(&round, category.name());
                        finish_win(&round, store);
                        display::pause(Duration::from_secs(2));
                        return Ok(());
                    }
                    Ok(Outcome::Lost) => {
                        display::print_round(&round, category.name());
                        display::print_loss(round.word().text());
                        display::pause(Duration::from_secs(2));
                        return Ok(());
                    }
                    Err(err) => {
                        display::warn(&err.to_string());
                        display::pause(Duration::from_secs(1));
                    }
                }
            }
        }
    }
}

/// Win epilogue: score, persistence, high-score callout
fn finish_win(round: &Round, store: &ScoreStore) {
    let Some(score) = round.final_score() else {
        return;
    };

    display::print_win(round.word().text(), score);

    match store.save(round.difficulty(), score) {
        Ok(true) => display::print_new_high_score(round.difficulty()),
        Ok(false) => {}
        Err(err) => display::warn(&format!("Could not save the high score: {err}")),
    }
}
