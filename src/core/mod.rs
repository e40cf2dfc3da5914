//! Core domain types for hangman
//!
//! This module contains the fundamental game rules with zero I/O.
//! All types here are pure, testable, and own the round state machine.

mod difficulty;
mod round;
mod score;
mod word;

pub use difficulty::Difficulty;
pub use round::{GuessError, HintError, Outcome, Phase, Round};
pub use score::compute_score;
pub use word::{Word, WordError};
