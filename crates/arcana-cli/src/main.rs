//! CLI frontend for the Arcanum tarot divination engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcanum — a tarot divination engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a single random card and print the reading
    Draw {
        /// Deck definition file
        #[arg(short, long, default_value = "tarot.json")]
        deck: PathBuf,

        /// Root directory of theme image assets
        #[arg(short, long, default_value = "resource")]
        resources: PathBuf,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory to save the card image into
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Draw a full formation spread
    Spread {
        /// Deck definition file
        #[arg(short, long, default_value = "tarot.json")]
        deck: PathBuf,

        /// Root directory of theme image assets
        #[arg(short, long, default_value = "resource")]
        resources: PathBuf,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory to save the card images into
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Deliver the spread as one chained batch instead of per-card messages
        #[arg(long)]
        chain: bool,
    },

    /// List available themes and their resolved subtypes
    Themes {
        /// Root directory of theme image assets
        #[arg(short, long, default_value = "resource")]
        resources: PathBuf,
    },

    /// List the deck's formations
    Formations {
        /// Deck definition file
        #[arg(short, long, default_value = "tarot.json")]
        deck: PathBuf,
    },

    /// Validate every card and formation in the deck
    Check {
        /// Deck definition file
        #[arg(short, long, default_value = "tarot.json")]
        deck: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Draw {
            deck,
            resources,
            seed,
            out_dir,
        } => commands::draw::run(&deck, &resources, seed, out_dir.as_deref()),
        Commands::Spread {
            deck,
            resources,
            seed,
            out_dir,
            chain,
        } => commands::spread::run(&deck, &resources, seed, out_dir.as_deref(), chain),
        Commands::Themes { resources } => commands::themes::run(&resources),
        Commands::Formations { deck } => commands::formations::run(&deck),
        Commands::Check { deck } => commands::check::run(&deck),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
