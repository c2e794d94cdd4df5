//! Citewatch CLI - skilled-nursing facility risk scoring and gap analysis

#![deny(warnings)]

// Global invariants enforced:
// - All business rules live in citewatch-core
// - Deterministic output ordering
// - Logs go to stderr, results to stdout

use anyhow::Context;
use citewatch_core::config::{self, ResolvedConfig};
use citewatch_core::gaps::{classify_all, CohortCitation, ScorecardRow};
use citewatch_core::registry::Registry;
use citewatch_core::report::{
    render_gaps_text, render_json, render_profile_detail, render_profiles_text,
    render_tags_text, render_trend_text, sort_profiles,
};
use citewatch_core::trends::trend_with_config;
use citewatch_core::{evaluate_batch, FacilityMetrics, PeerBenchmarks};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "CITEWATCH_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "citewatch")]
#[command(about = "Risk scoring and gap analysis for skilled-nursing facility citation data")]
#[command(version = env!("CITEWATCH_VERSION"))]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Path to config file (default: auto-discover)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Citation registry file (overrides config file and built-in table)
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve citation tags to registry definitions
    Tag {
        /// Tags in any spelling (880, F880, F-0880, ...)
        #[arg(required = true)]
        raw: Vec<String>,
    },
    /// Score one facility record or an array of records
    Score {
        /// JSON file with facility metrics ("-" for stdin)
        file: PathBuf,

        /// JSON file with market/state/national peer aggregates
        #[arg(long)]
        benchmarks: Option<PathBuf>,
    },
    /// Replay a facility's snapshot history
    Trend {
        /// JSON array of facility snapshots ("-" for stdin)
        file: PathBuf,
    },
    /// Classify clinical systems into gap alerts for a cohort
    Gaps {
        /// JSON array of cohort citations
        #[arg(long)]
        citations: PathBuf,

        /// JSON array of scorecard rows
        #[arg(long)]
        scorecards: PathBuf,

        /// Most-cited tags reported per system (overrides config file)
        #[arg(long)]
        top: Option<usize>,
    },
    /// Validate or show configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// A single record or an array of records
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Tag { raw } => {
            let resolved = load_config(cli.config.as_deref())?;
            let registry = load_registry(cli.registry.as_deref(), &resolved)?;
            let registry = registry.as_ref().unwrap_or_else(|| Registry::builtin());

            let resolutions: Vec<(String, _)> = raw
                .into_iter()
                .map(|input| {
                    let resolution = registry.resolve_detailed(&input);
                    (input, resolution)
                })
                .collect();

            match cli.format {
                OutputFormat::Text => print!("{}", render_tags_text(&resolutions)),
                OutputFormat::Json => {
                    let items: Vec<serde_json::Value> = resolutions
                        .iter()
                        .map(|(input, resolution)| {
                            serde_json::json!({ "input": input, "result": resolution })
                        })
                        .collect();
                    println!("{}", render_json(&items));
                }
            }
        }
        Commands::Score { file, benchmarks } => {
            let resolved = load_config(cli.config.as_deref())?;
            let records = read_json::<OneOrMany<FacilityMetrics>>(&file)?.into_vec();
            let peers = benchmarks
                .as_deref()
                .map(read_json::<PeerBenchmarks>)
                .transpose()?;

            tracing::debug!(records = records.len(), "scoring facilities");
            let profiles = evaluate_batch(&records, &resolved.weights, peers.as_ref());

            match cli.format {
                OutputFormat::Text => {
                    if profiles.len() == 1 {
                        print!("{}", render_profile_detail(&profiles[0]));
                    } else {
                        print!("{}", render_profiles_text(&sort_profiles(profiles)));
                    }
                }
                OutputFormat::Json => println!("{}", render_json(&profiles)),
            }
        }
        Commands::Trend { file } => {
            let resolved = load_config(cli.config.as_deref())?;
            let history: Vec<FacilityMetrics> = read_json(&file)?;
            let analysis = trend_with_config(&history, &resolved.weights, resolved.trend_window);

            match cli.format {
                OutputFormat::Text => print!("{}", render_trend_text(&analysis)),
                OutputFormat::Json => println!("{}", analysis.to_json()?),
            }
        }
        Commands::Gaps {
            citations,
            scorecards,
            top,
        } => {
            let resolved = load_config(cli.config.as_deref())?;
            let registry = load_registry(cli.registry.as_deref(), &resolved)?;
            let registry = registry.as_ref().unwrap_or_else(|| Registry::builtin());

            let citations: Vec<CohortCitation> = read_json(&citations)?;
            let scorecards: Vec<ScorecardRow> = read_json(&scorecards)?;

            let mut thresholds = resolved.gap_thresholds;
            if let Some(n) = top {
                if n == 0 {
                    anyhow::bail!("--top must be at least 1");
                }
                thresholds.top_tags = n;
            }

            let alerts = classify_all(&citations, &scorecards, registry, &thresholds);

            match cli.format {
                OutputFormat::Text => print!("{}", render_gaps_text(&alerts)),
                OutputFormat::Json => println!("{}", render_json(&alerts)),
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let current_dir = std::env::current_dir()?;
                let path = path.or(cli.config);
                match config::load_and_resolve(&current_dir, path.as_deref()) {
                    Ok(resolved) => {
                        if let Some(ref p) = resolved.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => {
                        eprintln!("Config validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                }
            }
            ConfigAction::Show { path } => {
                let path = path.or(cli.config);
                let resolved = load_config(path.as_deref())?;
                match cli.format {
                    OutputFormat::Json => println!("{}", resolved.to_json()?),
                    OutputFormat::Text => print_config(&resolved),
                }
            }
        },
    }

    Ok(())
}

/// Install the stderr log subscriber; CITEWATCH_LOG overrides the default filter
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber can only fail to install if one is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ResolvedConfig> {
    let current_dir = std::env::current_dir()?;
    config::load_and_resolve(&current_dir, path).context("failed to load configuration")
}

/// Registry from the CLI flag or config file; `None` means the built-in table
fn load_registry(flag: Option<&Path>, resolved: &ResolvedConfig) -> anyhow::Result<Option<Registry>> {
    match flag.or(resolved.registry_path.as_deref()) {
        Some(path) => Registry::load_file(path).map(Some),
        None => Ok(None),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_config(resolved: &ResolvedConfig) {
    println!("Configuration:");
    if let Some(ref p) = resolved.config_path {
        println!("  Source: {}", p.display());
    } else {
        println!("  Source: defaults (no config file found)");
    }
    println!();
    println!("Composite weights:");
    println!("  regulatory: {}", resolved.weights.regulatory);
    println!("  staffing: {}", resolved.weights.staffing);
    println!("  financial: {}", resolved.weights.financial);
    println!();
    println!("Gap thresholds:");
    println!(
        "  high_min_facilities: {}",
        resolved.gap_thresholds.high_min_facilities
    );
    println!(
        "  moderate_min_facilities: {}",
        resolved.gap_thresholds.moderate_min_facilities
    );
    println!("  target_score: {}", resolved.gap_thresholds.target_score);
    println!("  top_tags: {}", resolved.gap_thresholds.top_tags);
    println!();
    println!("Trend window: {}", resolved.trend_window);
    println!(
        "Registry: {}",
        resolved
            .registry_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    );
}
