use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use standup::cli::args::{Cli, Commands};
use standup::cli::commands;
use standup::config::Config;
use standup::error::StandupError;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr, filtered by `STANDUP_LOG` (default `warn`).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("STANDUP_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), StandupError> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => {
            let text = commands::read_input(&args.input)?;
            let outcome = commands::parse(&text, config.indicators()?, format)?;
            println!("{}", outcome.output);
            if args.strict && !outcome.needs_review.is_empty() {
                return Err(StandupError::NeedsReview(outcome.needs_review));
            }
            String::new()
        },
        Commands::Tokens(args) => {
            let text = commands::read_input(&args)?;
            commands::tokens(&text, format)?
        },
        Commands::Classify { text } => commands::classify(&text, &config.indicators()?, format)?,
        Commands::Completions { shell } => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
