use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli::batch;
use cli::report;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use triage_core::config;
use triage_core::TriageEngine;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg = match config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing("info");
            return report::report_failure(&anyhow::Error::new(e).context("load config"));
        }
    };
    init_tracing(&cfg.logging.level);

    let result = match TriageEngine::from_config(&cfg) {
        Ok(engine) => run(&engine, cli.command).await,
        Err(e) => Err(anyhow::Error::new(e)),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report::report_failure(&err),
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser)]
#[command(name = "repair-triage")]
#[command(about = "Triage appliance and vehicle faults", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a fault, estimate its price and match technicians
    Analyze {
        /// Equipment category, e.g. car or washing_machine
        #[arg(long, default_value = "")]
        category: String,
        /// Free-text description of the fault
        #[arg(long, default_value = "")]
        description: String,
        /// Caller location
        #[arg(long, default_value = "")]
        location: String,
    },
    /// List available technicians for a category
    Workers {
        category: String,
        /// Caller location
        #[arg(long, default_value = "")]
        location: String,
        /// Maximum distance; defaults to the configured value
        #[arg(long)]
        max_distance: Option<f64>,
    },
    /// Estimate a repair price range
    Price {
        category: String,
        /// Severity tier: critical, professional or simple
        #[arg(long)]
        severity: Option<String>,
        /// Fault description used to scale the estimate
        #[arg(long)]
        description: Option<String>,
    },
    /// Analyze a JSON array of {category, description, location} requests
    Batch { file: PathBuf },
}

async fn run(engine: &TriageEngine, command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            category,
            description,
            location,
        } => {
            let result = engine.evaluate(&category, &description, &location)?;
            print_json(&result)
        }
        Commands::Workers {
            category,
            location,
            max_distance,
        } => {
            let workers = engine.search_technicians(&category, &location, max_distance);
            print_json(&workers)
        }
        Commands::Price {
            category,
            severity,
            description,
        } => {
            let price =
                engine.estimate_price(&category, severity.as_deref(), description.as_deref())?;
            print_json(&price)
        }
        Commands::Batch { file } => {
            let requests = batch::load_requests(&file)?;
            let outcomes = batch::run_batch(engine, requests).await;
            print_json(&outcomes)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{out}");
    Ok(())
}
