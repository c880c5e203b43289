mod answers;
mod cli;
mod cli_help;
mod error;
mod export;
mod program;
mod report_helpers;
mod score;
mod telemetry;

use std::io;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = telemetry::init(&cli.log_level) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Score {
            answers,
            weights,
            json,
        } => score::run(&answers, weights.program, weights.catalog.as_deref(), json),
        Commands::Export {
            files,
            weights,
            output,
            append,
        } => export::run(
            &files,
            weights.program,
            weights.catalog.as_deref(),
            output.as_deref(),
            append,
        ),
        Commands::Programs { catalog, json } => program::run_list(catalog.as_deref(), json),
        Commands::CheckCatalog { file } => program::run_check(&file),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "placescore", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
