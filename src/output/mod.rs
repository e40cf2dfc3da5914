//! Terminal output formatting
//!
//! Gallows art, colored frame rendering, and pure string formatters. All
//! timing and screen control lives here, never in `core`.

pub mod art;
pub mod display;
pub mod formatters;

pub use display::{clear_screen, pause, print_high_scores, print_round, warn};
