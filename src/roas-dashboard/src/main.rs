//! ROAS Dashboard: builds campaign performance reports from exported
//! ad-spend records and attribution links.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use roas_core::{AppConfig, DateRange, SortKey};
use roas_reporting::signal::classify_with;
use roas_reporting::{CreativeCache, ReportBuilder, ReportInput};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "roas-dashboard")]
#[command(about = "Campaign ROAS aggregation and traffic-light reporting")]
#[command(version)]
struct Cli {
    /// TOML config file (environment variables still take precedence)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Green threshold in ROAS percent (overrides config)
    #[arg(long, global = true, env = "ROAS_DASHBOARD__SIGNAL__GREEN_THRESHOLD")]
    green: Option<f64>,

    /// Yellow threshold in ROAS percent (overrides config)
    #[arg(long, global = true, env = "ROAS_DASHBOARD__SIGNAL__YELLOW_THRESHOLD")]
    yellow: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a dashboard report from a JSON export
    Report {
        /// JSON file with `records`, `channels` and `links`
        #[arg(short, long)]
        input: PathBuf,

        /// First day to include (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,

        /// Last day to include (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,

        /// JSON file with campaign creatives to attach
        #[arg(long)]
        creatives: Option<PathBuf>,

        /// Campaign ordering: spend, roas, revenue, clicks
        #[arg(long)]
        sort_by: Option<SortKey>,

        /// Pretty-print the report
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Classify a single ROAS value
    Classify {
        /// ROAS in percent
        #[arg(long)]
        roas: f64,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(Some(path.as_path()))
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        }),
    };

    if let Some(green) = cli.green {
        config.signal.green_threshold = green;
    }
    if let Some(yellow) = cli.yellow {
        config.signal.yellow_threshold = yellow;
    }
    Ok(config)
}

fn read_json_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roas_dashboard=info,roas_reporting=info".into()),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli)?;
    let threshold = config.signal_threshold()?;

    info!(
        green = threshold.green,
        yellow = threshold.yellow,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Report {
            input,
            from,
            to,
            creatives,
            sort_by,
            pretty,
        } => {
            if let Some(sort_by) = sort_by {
                config.report.sort_by = sort_by;
            }
            let range = match (from, to) {
                (Some(from), Some(to)) => Some(DateRange::new(from, to)?),
                _ => None,
            };

            let report_input: ReportInput = serde_json::from_str(&read_json_file(&input)?)
                .with_context(|| format!("invalid report input in {}", input.display()))?;
            info!(
                records = report_input.records.len(),
                channels = report_input.channels.len(),
                links = report_input.links.len(),
                "Report input loaded"
            );

            let builder = ReportBuilder::from_config(&config)?;
            let report = match creatives {
                Some(path) => {
                    let cache = CreativeCache::from_json(&read_json_file(&path)?)
                        .with_context(|| format!("invalid creatives in {}", path.display()))?;
                    if cache.is_empty() {
                        warn!(path = %path.display(), "Creative file has no entries");
                    } else {
                        info!(creatives = cache.len(), "Creative cache loaded");
                    }
                    builder.build_with_creatives(&report_input, range, &cache)
                }
                None => builder.build(&report_input, range),
            };

            let out = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{out}");
        }
        Commands::Classify { roas } => {
            let status = classify_with(roas, &threshold);
            println!(
                "{}",
                serde_json::json!({
                    "roas": roas,
                    "status": status,
                    "color": status.color(),
                    "threshold": threshold,
                })
            );
        }
    }

    Ok(())
}
