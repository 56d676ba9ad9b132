//! Refiner CLI: normalize contribution payloads into SQLite.
//!
//! Usage:
//!   refiner ingest <FILE> [--db path] [--strict] [--zomato-only]
//!   refiner inspect <FILE> [--strict] [--zomato-only]

use clap::{Parser, Subcommand};
use refiner::{GraphStore, IngestError, IngestOptions, IngestOutcome, IngestPipeline, OpenStore, SqliteStore};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "refiner",
    version,
    about = "Normalize multi-provider contribution payloads into relational tables"
)]
struct Cli {
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a payload and store the result
    Ingest {
        /// Path to the JSON payload
        file: PathBuf,
        /// Path to SQLite database file
        #[arg(long)]
        db: Option<PathBuf>,
        /// Reject payloads that mix legacy and current ZOMATO entries
        #[arg(long)]
        strict: bool,
        /// Keep only ZOMATO contributions
        #[arg(long)]
        zomato_only: bool,
    },
    /// Normalize a payload and print a summary without storing it
    Inspect {
        /// Path to the JSON payload
        file: PathBuf,
        /// Reject payloads that mix legacy and current ZOMATO entries
        #[arg(long)]
        strict: bool,
        /// Keep only ZOMATO contributions
        #[arg(long)]
        zomato_only: bool,
    },
}

/// Get the default database path (~/.local/share/refiner/refiner.db)
fn default_db_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    data_dir.join("refiner").join("refiner.db")
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_pipeline(file: &Path, options: IngestOptions) -> Result<IngestOutcome, String> {
    let json = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;

    IngestPipeline::new(options).ingest_str(&json).map_err(|e| match &e {
        IngestError::Contribution { partial, .. } => format!(
            "{} ({} entities from earlier contributions not stored)",
            e,
            partial.len()
        ),
        _ => e.to_string(),
    })
}

fn cmd_ingest(file: &Path, db: Option<PathBuf>, options: IngestOptions) -> i32 {
    let outcome = match run_pipeline(file, options) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let db_path = db.unwrap_or_else(default_db_path);
    let store = match SqliteStore::open(&db_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: Failed to open database: {}", e);
            return 1;
        }
    };

    match store.persist(&outcome.graph) {
        Ok(receipt) => {
            println!(
                "Stored {} entities from {} contributions ({} skipped) into {}",
                receipt.len(),
                outcome.report.normalized,
                outcome.report.skipped.len(),
                db_path.display()
            );
            if outcome.report.ambiguous_legacy {
                eprintln!("Warning: payload mixes legacy and current ZOMATO entries");
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_inspect(file: &Path, options: IngestOptions) -> i32 {
    let outcome = match run_pipeline(file, options) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let summary = serde_json::json!({
        "format": outcome.format,
        "report": outcome.report,
        "counts_by_table": outcome.graph.counts_by_table(),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.command {
        Commands::Ingest {
            file,
            db,
            strict,
            zomato_only,
        } => cmd_ingest(
            &file,
            db,
            IngestOptions {
                strict_format: strict,
                zomato_only,
            },
        ),
        Commands::Inspect {
            file,
            strict,
            zomato_only,
        } => cmd_inspect(
            &file,
            IngestOptions {
                strict_format: strict,
                zomato_only,
            },
        ),
    };

    std::process::exit(code);
}
