//! replication-scout - Entry point
//!
//! Thin CLI driver over the paper pipeline: fetch journal metadata, resolve
//! replication packages, write a CSV.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use replication_scout::bibliography::select_journals;
use replication_scout::{Config, HttpContext, Pipeline, export};

#[derive(Parser, Debug)]
#[command(name = "replication-scout")]
#[command(about = "Locate replication packages for published papers")]
#[command(version)]
struct Cli {
    /// Journal to scan (repeatable); defaults to the whole registry
    #[arg(long = "journal")]
    journals: Vec<String>,

    /// First publication year of the range
    #[arg(long, default_value_t = 2022)]
    start_year: i32,

    /// Last publication year of the range
    #[arg(long, default_value_t = 2024)]
    end_year: i32,

    /// Papers fetched per journal
    #[arg(long, default_value_t = 10)]
    papers_per_journal: usize,

    /// Output CSV path
    #[arg(long, default_value = "papers.csv")]
    output: std::path::PathBuf,

    /// Skip repository lookups (direct-URL scan only; much faster)
    #[arg(long)]
    no_external: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        start_year = cli.start_year,
        end_year = cli.end_year,
        "Starting replication scout"
    );

    let journals = select_journals(&cli.journals)?;

    let config = Config::new();
    let http = HttpContext::new(&config)?;
    let pipeline = Pipeline::new(&config, &http);

    let results = pipeline
        .run(
            &journals,
            cli.start_year,
            cli.end_year,
            cli.papers_per_journal,
            !cli.no_external,
        )
        .await;

    export::write_csv(&cli.output, &results)?;

    let found = results.iter().filter(|row| row.outcome.is_found()).count();
    tracing::info!(
        output = %cli.output.display(),
        papers = results.len(),
        found,
        "Results written"
    );

    Ok(())
}
