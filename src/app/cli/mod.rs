//! CLI Adapter.

mod expand;
mod scan;

use std::path::PathBuf;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mdweave")]
#[command(version)]
#[command(
    about = "Expand file, URL, and command imports in markdown documents",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand every directive and print the resulting document
    #[clap(visible_alias = "x")]
    Expand {
        /// Document to expand, or '-' to read from stdin
        input: String,
        /// Proceed even when the hard token limit is exceeded
        #[arg(short, long)]
        force: bool,
        /// TOML file with expansion settings
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List directives without expanding them
    #[clap(visible_alias = "s")]
    Scan {
        /// Document to scan
        input: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Expand { input, force, config, output } => {
            expand::run_expand(&input, force, config, output)
        }
        Commands::Scan { input } => scan::run_scan(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
