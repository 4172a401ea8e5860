//! Quire CLI - Command-line interface for packaging EPUB books

mod commands;
mod manifest;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a modification date (must be YYYY-MM-DD)
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("'{}' is not a date in YYYY-MM-DD form", s))
}

#[derive(Parser)]
#[command(name = "quire")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an EPUB from a book manifest
    Build {
        /// Book manifest (JSON)
        manifest: String,

        /// Output folder
        #[arg(short, long)]
        output: String,

        /// Archive name without extension (defaults to the manifest name)
        #[arg(short, long)]
        name: Option<String>,

        /// Write the unpacked folder tree instead of an archive
        #[arg(long)]
        unpacked: bool,

        /// Modification date stamped into the package (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        modified: Option<NaiveDate>,
    },

    /// List the files a book manifest packages into
    Files {
        /// Book manifest (JSON)
        manifest: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a book manifest
    Validate {
        /// Book manifest (JSON)
        manifest: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "quire_cli=debug,quire_core=debug"
    } else {
        "quire_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Build {
            manifest,
            output,
            name,
            unpacked,
            modified,
        } => {
            commands::build(commands::BuildArgs {
                manifest: &manifest,
                output: &output,
                name: name.as_deref(),
                unpacked,
                modified,
            })
            .await
        }

        Commands::Files { manifest, json } => commands::files(&manifest, json).await,

        Commands::Validate { manifest } => commands::validate(&manifest),
    }
}
