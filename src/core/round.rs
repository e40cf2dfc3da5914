//! Round engine
//!
//! Owns the state of one hangman round and enforces its rules: guess
//! validation, win/loss transitions, the once-per-round hint, and abort.

use super::{Difficulty, Word, compute_score};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Result of a single accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The round goes on
    Continue,
    /// Every letter of the word has been guessed
    Won,
    /// The wrong-guess budget is exhausted
    Lost,
}

/// Lifecycle of a round
///
/// `Won`, `Lost`, and `Aborted` are terminal: no mutating operation is
/// accepted once reached, only reads of the final word and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
    Aborted,
}

/// Error type for rejected guesses
///
/// All variants are recovered locally by re-prompting; the round state is
/// unchanged when any of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Empty,
    MultipleCharacters,
    NotAlphabetic(char),
    AlreadyGuessed(char),
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a letter"),
            Self::MultipleCharacters => write!(f, "Please enter a single letter"),
            Self::NotAlphabetic(ch) => write!(f, "{ch:?} is not a letter"),
            Self::AlreadyGuessed(ch) => write!(f, "You've already guessed '{ch}'"),
            Self::RoundOver => write!(f, "The round is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Error type for rejected hint requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintError {
    NotAllowed,
    AlreadyUsed,
    RoundOver,
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAllowed => write!(f, "Hints are not available at this difficulty"),
            Self::AlreadyUsed => write!(f, "The hint has already been used this round"),
            Self::RoundOver => write!(f, "The round is already over"),
        }
    }
}

impl std::error::Error for HintError {}

/// One hangman round
///
/// The guessed-letter set only grows; the wrong count always equals the
/// number of guessed letters absent from the word.
#[derive(Debug, Clone)]
pub struct Round {
    word: Word,
    difficulty: Difficulty,
    guessed: FxHashSet<char>,
    wrong_count: u8,
    hint_used: bool,
    phase: Phase,
}

impl Round {
    /// Start a new round for the given word and difficulty
    #[must_use]
    pub fn new(word: Word, difficulty: Difficulty) -> Self {
        Self {
            word,
            difficulty,
            guessed: FxHashSet::default(),
            wrong_count: 0,
            hint_used: false,
            phase: Phase::InProgress,
        }
    }

    /// Submit one guess
    ///
    /// `input` must be exactly one ASCII letter; it is matched
    /// case-insensitively. Malformed input and repeated letters are
    /// rejected without touching the round state.
    ///
    /// Win is checked before loss. A winning guess is a correct letter and
    /// cannot raise the wrong count, so the ordering is a tie-break
    /// convention rather than a reachable branch.
    ///
    /// # Errors
    /// Returns `GuessError` for anything other than a fresh single letter,
    /// or when the round has already ended.
    pub fn submit_guess(&mut self, input: &str) -> Result<Outcome, GuessError> {
        if self.phase != Phase::InProgress {
            return Err(GuessError::RoundOver);
        }

        let mut chars = input.chars();
        let first = chars.next().ok_or(GuessError::Empty)?;
        if chars.next().is_some() {
            return Err(GuessError::MultipleCharacters);
        }

        let letter = first.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(GuessError::NotAlphabetic(first));
        }

        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        self.guessed.insert(letter);
        if !self.word.has_letter(letter) {
            self.wrong_count += 1;
        }

        if self.word.chars().all(|ch| self.guessed.contains(&ch)) {
            self.phase = Phase::Won;
            return Ok(Outcome::Won);
        }

        if self.wrong_count >= self.difficulty.max_wrong() {
            self.phase = Phase::Lost;
            return Ok(Outcome::Lost);
        }

        Ok(Outcome::Continue)
    }

    /// Reveal one unguessed letter of the word
    ///
    /// Chooses uniformly at random among the distinct letters not yet
    /// guessed. The hint is consumed on any successful call, so a second
    /// request always fails.
    ///
    /// # Errors
    /// Returns `HintError` when the difficulty forbids hints, the hint was
    /// already used, or the round has ended.
    pub fn request_hint(&mut self, rng: &mut impl Rng) -> Result<Option<char>, HintError> {
        if self.phase != Phase::InProgress {
            return Err(HintError::RoundOver);
        }
        if !self.difficulty.hint_allowed() {
            return Err(HintError::NotAllowed);
        }
        if self.hint_used {
            return Err(HintError::AlreadyUsed);
        }

        self.hint_used = true;

        let eligible: Vec<char> = self
            .word
            .distinct_letters()
            .into_iter()
            .filter(|letter| !self.guessed.contains(letter))
            .collect();

        Ok(eligible.choose(rng).copied())
    }

    /// Give up the round
    ///
    /// Terminal, no score; returns the word so the caller can reveal it.
    pub fn abort(&mut self) -> &Word {
        if self.phase == Phase::InProgress {
            self.phase = Phase::Aborted;
        }
        &self.word
    }

    /// Current phase of the round
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the round has reached a terminal phase
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase != Phase::InProgress
    }

    /// The hidden word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// The difficulty this round is played at
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Guessed letters in alphabetical order
    #[must_use]
    pub fn guessed_sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Number of wrong guesses so far
    #[inline]
    #[must_use]
    pub const fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    /// Wrong guesses remaining before the round is lost
    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> u8 {
        self.difficulty.max_wrong() - self.wrong_count
    }

    /// Whether a hint can be requested right now
    #[must_use]
    pub fn hint_available(&self) -> bool {
        self.phase == Phase::InProgress && self.difficulty.hint_allowed() && !self.hint_used
    }

    /// Whether a letter of the word has been guessed
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Final score, present only for a won round
    #[must_use]
    pub fn final_score(&self) -> Option<u32> {
        match self.phase {
            Phase::Won => Some(compute_score(
                self.difficulty,
                self.word.len(),
                u32::from(self.wrong_count),
            )),
            _ => None,
        }
    }
}
