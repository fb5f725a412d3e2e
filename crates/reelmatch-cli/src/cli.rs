//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reelmatch - genre-similarity movie recommendations
#[derive(Parser, Debug)]
#[command(name = "reelmatch")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "REELMATCH_CONFIG", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend movies for one user
    Recommend {
        /// User id from the profile table
        #[arg(short, long)]
        user: String,

        /// Number of recommendations
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Share of out-of-taste titles, 0..1
        #[arg(long)]
        ratio: Option<f64>,

        /// Minimum IMDb rating
        #[arg(long)]
        min_rating: Option<f64>,

        /// Also write the recommendations to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the showcase users and export a combined CSV
    Demo {
        /// Minimum IMDb rating
        #[arg(long)]
        min_rating: Option<f64>,

        /// Export file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clean the IMDb name.basics dump into an actor table
    CleanActors {
        /// Raw name.basics TSV
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Cleaned CSV output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a synthetic user profile table
    GenerateUsers {
        /// Total number of users, including the showcase users
        #[arg(long, default_value_t = reelmatch_data::users::DEFAULT_USER_COUNT)]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Get a value by dotted key (e.g. `recommend.min_rating`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Write a default config file
    Init {
        /// Target file (defaults to ./reelmatch.toml)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
