use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vehicle_ledger::{LedgerConfig, LedgerQuery, VehicleLedger, jsonl, render};

#[derive(Parser)]
#[command(name = "vehicle-ledger")]
#[command(about = "Vehicle acquisition ledger - search, filter, sort and summarize vehicle purchases")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// JSONL file of vehicle records (default: built-in sample)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct QueryArgs {
    /// Case-insensitive text matched against make, model, dealer and VIN
    #[arg(short, long, default_value = "")]
    search: String,

    /// Status filter: all, cleared or pending
    #[arg(long)]
    status: Option<String>,

    /// Sort order: date, amount or aging
    #[arg(long)]
    sort: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the records matching a query
    List {
        #[command(flatten)]
        query: QueryArgs,

        /// Print records as JSONL instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show statistics over all records
    Stats {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show statistics followed by the matching records
    Dashboard {
        #[command(flatten)]
        query: QueryArgs,
    },
}

impl QueryArgs {
    fn to_query(&self, config: &LedgerConfig) -> LedgerQuery {
        LedgerQuery::from_text(
            &self.search,
            self.status.as_deref().unwrap_or(&config.default_status),
            self.sort.as_deref().unwrap_or(&config.default_sort),
        )
    }
}

fn main() -> Result<()> {
    // Setup tracing; stdout is reserved for rendered output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = LedgerConfig::load(cli.config.as_deref())?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    // Open ledger
    let ledger = match cli.data.as_ref().or(config.data_path.as_ref()) {
        Some(path) => VehicleLedger::load(path)?,
        None => VehicleLedger::seeded(),
    };

    match cli.command {
        Commands::List { query, json } => {
            let view = ledger.view(&query.to_query(&config));
            if json {
                print!("{}", jsonl::to_jsonl(&view.visible)?);
            } else {
                print!("{}", render::render_records(&view));
            }
        }
        Commands::Stats { json } => {
            if json {
                let text = serde_json::to_string_pretty(ledger.statistics()).context("Failed to serialize statistics")?;
                println!("{}", text);
            } else {
                print!("{}", render::render_statistics(ledger.statistics()));
            }
        }
        Commands::Dashboard { query } => {
            let view = ledger.view(&query.to_query(&config));
            print!("{}", render::render_dashboard(&view));
        }
    }

    Ok(())
}
