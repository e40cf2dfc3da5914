//! Interactive command flows

pub mod menu;
pub mod play;
pub mod scores;

pub use menu::run_menu;
pub use play::run_play;
pub use scores::run_scores;
