//! mcda-engine CLI - rank alternatives or extract Pareto fronts from JSON.

use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use mcda_engine::adapters::JsonRecordSource;
use mcda_engine::application::{RecommendCommand, RecommendHandler};
use mcda_engine::config::AppConfig;
use mcda_engine::domain::dominance::DominanceVariant;
use mcda_engine::telemetry;

#[derive(Parser)]
#[command(name = "mcda-engine")]
#[command(version)]
#[command(about = "Multi-criteria ranking and Pareto filtering over JSON records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Optional configuration file, layered under MCDA_ENGINE__* variables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the records in a data file; reads the request JSON from stdin
    Recommend {
        /// JSON file of alternatives (object keyed by id, or array of records)
        #[arg(short, long)]
        data: PathBuf,

        /// Id field for array-shaped data files
        #[arg(long, default_value = "id")]
        id_field: String,
    },

    /// Extract the Pareto front of points read from stdin (JSON array of arrays)
    Pareto {
        /// Override the configured variant (exhaustive, early_exit, pre_sorted)
        #[arg(long)]
        variant: Option<DominanceVariant>,

        /// Run every variant and report comparisons and timings
        #[arg(long)]
        benchmark: bool,
    },

    /// Validate the configuration and print it
    CheckConfig,
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_with_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    telemetry::init(&config.logging);

    match cli.command {
        Commands::Recommend { data, id_field } => {
            let source = JsonRecordSource::from_path(&data)
                .with_context(|| format!("Failed to read alternatives from {:?}", data))?
                .with_id_field(id_field);
            let command: RecommendCommand =
                serde_json::from_str(&read_stdin()?).context("Malformed recommendation request")?;

            let handler =
                RecommendHandler::new(Arc::new(source), config.ranking, config.dominance);
            let recommendations = handler.handle(command)?;
            info!(count = recommendations.len(), "Recommendations ready");
            print_json(&recommendations)
        }

        Commands::Pareto { variant, benchmark } => {
            let points: Vec<Vec<f64>> =
                serde_json::from_str(&read_stdin()?).context("Expected a JSON array of points")?;
            let mut dominance = config.dominance;
            if let Some(variant) = variant {
                dominance.variant = variant;
            }
            let filter = dominance.filter();

            if benchmark {
                let reports = filter.benchmark(&points);
                for report in &reports {
                    info!(
                        variant = %report.variant,
                        front = report.front.len(),
                        comparisons = report.front.comparisons,
                        elapsed_us = report.elapsed.as_micros() as u64,
                        "Dominance variant finished"
                    );
                }
                print_json(&reports)
            } else {
                print_json(&filter.front(&points))
            }
        }

        Commands::CheckConfig => {
            info!("Configuration is valid");
            println!("{:#?}", config);
            Ok(())
        }
    }
}
