//! Formatting utilities for terminal output

use crate::core::Round;

/// Format the hidden word with guessed letters revealed
///
/// Unrevealed letters become underscores; characters are space-separated.
#[must_use]
pub fn masked_word(round: &Round) -> String {
    let rendered: Vec<String> = round
        .word()
        .chars()
        .map(|ch| {
            if round.is_revealed(ch) {
                ch.to_string()
            } else {
                "_".to_string()
            }
        })
        .collect();
    rendered.join(" ")
}

/// Format the guessed letters as a comma-separated, sorted list
#[must_use]
pub fn guessed_line(round: &Round) -> String {
    let letters: Vec<String> = round
        .guessed_sorted()
        .into_iter()
        .map(|ch| ch.to_string())
        .collect();
    letters.join(", ")
}

/// Uppercase the first character for menu and table labels
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, Round, Word};

    fn round_with_guesses(word: &str, guesses: &[&str]) -> Round {
        let mut round = Round::new(Word::new(word).unwrap(), Difficulty::Easy);
        for guess in guesses {
            round.submit_guess(guess).unwrap();
        }
        round
    }

    #[test]
    fn masked_word_starts_blank() {
        let round = round_with_guesses("mango", &[]);
        assert_eq!(masked_word(&round), "_ _ _ _ _");
    }

    #[test]
    fn masked_word_reveals_guessed_letters() {
        let round = round_with_guesses("mango", &["m", "o"]);
        assert_eq!(masked_word(&round), "m _ _ _ o");
    }

    #[test]
    fn masked_word_reveals_duplicates_together() {
        let round = round_with_guesses("banana", &["a"]);
        assert_eq!(masked_word(&round), "_ a _ a _ a");
    }

    #[test]
    fn guessed_line_sorted() {
        let round = round_with_guesses("mango", &["o", "z", "m"]);
        assert_eq!(guessed_line(&round), "m, o, z");
    }

    #[test]
    fn guessed_line_empty() {
        let round = round_with_guesses("mango", &[]);
        assert_eq!(guessed_line(&round), "");
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("fruits"), "Fruits");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }
}
