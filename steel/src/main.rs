//! # Steel
//!
//! Command line access to the data pack argument handlers: list the values of an
//! argument kind, parse a token, or complete a prefix the way a command would.
mod logger;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use steel_core::command::{AnyHandler, ArgumentHandler, ArgumentKind, HandlerTable};
use steel_core::config::DecreeConfig;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "steel")]
#[command(about = "Parse and complete command arguments backed by data packs")]
struct Args {
    /// Config file, created with defaults if missing
    #[arg(short, long, value_name = "PATH", default_value = "steel_config.json5")]
    config: PathBuf,

    /// Packs folder, overrides the config
    #[arg(short, long, value_name = "DIR")]
    packs: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every known value of a kind
    List {
        /// entity, biome, boolean or integer
        kind: ArgumentKind,
    },
    /// Parse a token and print its canonical form
    Parse {
        /// entity, biome, boolean or integer
        kind: ArgumentKind,
        /// The token to parse
        token: String,
    },
    /// Print the values matching a partial token
    Complete {
        /// entity, biome, boolean or integer
        kind: ArgumentKind,
        /// The partial token
        #[arg(default_value = "")]
        prefix: String,
    },
    /// Print the example token of a kind
    Placeholder {
        /// entity, biome, boolean or integer
        kind: ArgumentKind,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose)?;

    let mut config = DecreeConfig::load_or_create(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    if let Some(packs) = args.packs {
        config.packs_folder = packs;
    }
    tracing::debug!(packs = %config.packs_folder.display(), "Using packs folder");

    run(&config.handler_table(), args.command)
}

fn run(table: &HandlerTable, command: Command) -> Result<()> {
    match command {
        Command::List { kind } => print_suggestions(handler(table, kind)?, ""),
        Command::Complete { kind, prefix } => print_suggestions(handler(table, kind)?, &prefix),
        Command::Parse { kind, token } => {
            let handler = handler(table, kind)?;
            let value = handler.parse_argument(&token)?;
            if let Some(canonical) = handler.format_argument(&value) {
                println!("{canonical}");
            }
            Ok(())
        }
        Command::Placeholder { kind } => {
            println!("{}", handler(table, kind)?.placeholder());
            Ok(())
        }
    }
}

fn handler(table: &HandlerTable, kind: ArgumentKind) -> Result<&AnyHandler> {
    table
        .get(kind)
        .with_context(|| format!("No handler is registered for {kind} arguments"))
}

fn print_suggestions(handler: &AnyHandler, prefix: &str) -> Result<()> {
    let scan = handler
        .suggest(prefix)
        .context("Failed to read the packs folder")?;

    for failure in &scan.failures {
        tracing::warn!("Skipped {failure}");
    }
    for token in scan.values {
        println!("{token}");
    }
    Ok(())
}
