//! Gallows - CLI
//!
//! Terminal hangman with word categories, three difficulty levels, and
//! persistent high scores.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gallows::{
    commands::{run_menu, run_play, run_scores},
    scores::{DEFAULT_SCORES_FILE, ScoreStore},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gallows",
    about = "Terminal hangman with word categories, difficulty levels, and high scores",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path of the high-score file
    #[arg(long, global = true, default_value = DEFAULT_SCORES_FILE)]
    scores_file: PathBuf,

    /// Seed for reproducible word and hint selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Welcome screen and main menu (default)
    Menu,

    /// Jump straight into a game
    Play,

    /// Print the high-score table
    Scores,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = ScoreStore::new(cli.scores_file);
    let mut rng = make_rng(cli.seed);

    // Default to the full menu if no command given
    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(&store, &mut rng),
        Commands::Play => run_play(&store, &mut rng),
        Commands::Scores => {
            run_scores(&store);
            Ok(())
        }
    }
}

/// Seeded rng when requested, OS entropy otherwise
fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
