//! Eligible CLI - plain-language screening surveys from trial eligibility criteria.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            glossary,
            input,
            corrector,
            language,
            model,
            temperature,
            skip_invalid,
            json,
            output,
        } => commands::generate::run(
            commands::generate::GenerateArgs {
                glossary,
                input,
                corrector,
                language,
                model,
                temperature,
                skip_invalid,
                json,
                output,
            },
            cli.verbose,
        ),

        Commands::Glossary {
            file,
            skip_invalid,
            lookup,
            json,
        } => commands::glossary::run(file, skip_invalid, lookup, json, cli.verbose),

        Commands::Segment { input, json } => commands::segment::run(input, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let default = if verbose { "eligible=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
