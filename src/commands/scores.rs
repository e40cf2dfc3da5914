//! High-score table

use crate::output::display;
use crate::scores::ScoreStore;

/// Print the high-score table from the backing store
///
/// A missing or unreadable score file prints as all zeros.
pub fn run_scores(store: &ScoreStore) {
    let record = store.load();
    display::print_high_scores(&record);
}
