//! Blade CLI - template tag rewriter.
//!
//! Provides commands for:
//! - `rewrite`: Rewrite custom tags in template files into PHP
//! - `directives`: List registered directives

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DirectivesArgs, RewriteArgs};
use output::Output;

/// Blade - template tag rewriter.
#[derive(Parser)]
#[command(name = "blade", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite template files (or standard input).
    Rewrite(RewriteArgs),
    /// List registered directives.
    Directives(DirectivesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Rewrite(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Rewrite(args) => args.execute(),
        Commands::Directives(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&err);
        std::process::exit(1);
    }
}
