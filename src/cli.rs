/// CLI argument definitions for the `placescore` command.
///
/// Defines all subcommands and their arguments using the `clap` derive
/// macros; long help text lives in `cli_help`.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;
use crate::program::Program;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "placescore", version, about = "Public space quality score")]
pub struct Cli {
    /// Log filter when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Weighting arguments shared by the scoring commands.
#[derive(Args)]
pub struct WeightArgs {
    /// Program id, overriding the program_id of each record
    #[arg(long)]
    pub program: Option<Program>,

    /// TOML catalog overriding the built-in program weights
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate answer records and print the score report
    #[command(long_about = cli_help::SCORE)]
    Score {
        /// JSON file with one answer record or an array of them
        answers: PathBuf,

        #[command(flatten)]
        weights: WeightArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score answer records and write one CSV row each
    #[command(long_about = cli_help::EXPORT)]
    Export {
        /// JSON answer files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        weights: WeightArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Add rows to the output file instead of replacing it
        #[arg(long, requires = "output")]
        append: bool,
    },

    /// List programs with their section weights and indicator overrides
    #[command(long_about = cli_help::PROGRAMS)]
    Programs {
        /// TOML catalog overriding the built-in program weights
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog file and report every problem
    CheckCatalog {
        /// TOML catalog file
        file: PathBuf,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}
