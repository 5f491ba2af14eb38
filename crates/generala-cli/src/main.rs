//! Terminal frontend for the Generala dice game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "generala",
    about = "Generala — a themed five-dice game for the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match
    Play {
        /// Theme file to load
        #[arg(short, long, default_value = "themes.json")]
        theme: PathBuf,

        /// Score file the final score is appended to
        #[arg(long, default_value = "data/scores.csv")]
        scores: PathBuf,

        /// RNG seed for reproducible dice
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the top recorded scores
    Scores {
        /// Score file to read
        #[arg(long, default_value = "data/scores.csv")]
        scores: PathBuf,

        /// How many entries to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// List the themes defined in a theme file
    Themes {
        /// Theme file to load
        #[arg(short, long, default_value = "themes.json")]
        theme: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            theme,
            scores,
            seed,
        } => commands::play::run(&theme, &scores, seed),
        Commands::Scores { scores, count } => commands::scores::run(&scores, count),
        Commands::Themes { theme } => commands::themes::run(&theme),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
