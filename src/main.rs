use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use club_pulse::calculate::{self, ClubReport};
use club_pulse::config::AppConfig;
use club_pulse::fetch::{load_snapshot, JsonlSource};
use club_pulse::models::RankingKind;
use club_pulse::parse_day;
use club_pulse::storage::StorageConfig;

#[derive(Parser)]
#[command(name = "club-pulse")]
#[command(about = "Multiplayer club roster tracker with engagement analytics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full report: rankings, insights, and member records
    Report {
        /// Compute as of this date instead of now (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Only the club-level insight object
    Insights {
        /// Compute as of this date instead of now (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// One ranking, or all of them
    Rankings {
        /// Compute as of this date instead of now (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,

        /// Ranking name (e.g. "trophy_leaders", "weekly_battlers")
        #[arg(long)]
        board: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn resolve_as_of(as_of: Option<&str>) -> Result<DateTime<Utc>> {
    match as_of {
        None => Ok(Utc::now()),
        Some(s) => {
            let day = parse_day(s)
                .with_context(|| format!("Invalid --as-of date (expected YYYY-MM-DD): {}", s))?;
            // End of the requested day, so that day's events count as recent.
            let end_of_day = day
                .and_hms_opt(23, 59, 59)
                .context("Invalid end-of-day time")?;
            Ok(DateTime::from_naive_utc_and_offset(end_of_day, Utc))
        }
    }
}

async fn generate_report(config: &AppConfig, as_of: DateTime<Utc>) -> Result<ClubReport> {
    let storage = StorageConfig::new(config.data_dir.clone());
    let source = JsonlSource::new(storage);
    let snapshot = load_snapshot(&source).await?;
    Ok(calculate::build_report(&snapshot, as_of, &config.analytics))
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting club-pulse v{}", env!("CARGO_PKG_VERSION"));

    // Config file is optional; CLI flags override it.
    let config_path = PathBuf::from(&cli.config);
    let mut config = if config_path.exists() {
        AppConfig::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        AppConfig::default()
    };
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = PathBuf::from(data_dir);
    }

    match cli.command {
        Commands::Report { as_of, pretty } => {
            let as_of = resolve_as_of(as_of.as_deref())?;
            let report = generate_report(&config, as_of).await?;
            print_json(&report, pretty)?;
        }

        Commands::Insights { as_of, pretty } => {
            let as_of = resolve_as_of(as_of.as_deref())?;
            let report = generate_report(&config, as_of).await?;
            print_json(&report.insight, pretty)?;
        }

        Commands::Rankings {
            as_of,
            board,
            pretty,
        } => {
            let as_of = resolve_as_of(as_of.as_deref())?;
            let report = generate_report(&config, as_of).await?;

            match board.as_deref() {
                None => print_json(&report.rankings, pretty)?,
                Some(name) => {
                    let kind: RankingKind = match name.parse() {
                        Ok(kind) => kind,
                        Err(e) => bail!(
                            "{}. Known rankings: {}",
                            e,
                            RankingKind::ALL
                                .iter()
                                .map(|k| k.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        ),
                    };
                    let ranking = report
                        .rankings
                        .iter()
                        .find(|r| r.kind == kind)
                        .context("Ranking missing from report")?;
                    print_json(ranking, pretty)?;
                }
            }
        }
    }

    Ok(())
}
