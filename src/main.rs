use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use employee_pairs::calculation::{aggregate_pairs, rank_pairs, select_longest_pair};
use employee_pairs::config::{ConfigLoader, InputSettings};
use employee_pairs::loader::RecordLoader;

/// Finds the pair of employees who worked together longest on shared projects.
#[derive(Debug, Parser)]
#[command(name = "employee-pairs", version, about)]
struct Cli {
    /// Records file, one `employee,project,start,end` per line
    #[arg(default_value = "res/SampleData.txt")]
    input: PathBuf,

    /// YAML file overriding the input format
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every pair with its total days instead of only the winner
    #[arg(long)]
    all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level written to stderr
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Installs the global `tracing` subscriber on stderr.
///
/// Unrecognised filter directives fall back to `warn`.
fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let settings = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?
            .into_settings(),
        None => InputSettings::default(),
    };

    let records = RecordLoader::new(settings)
        .load_file(&cli.input)
        .with_context(|| format!("reading records from {}", cli.input.display()))?;

    let ledger = aggregate_pairs(&records);

    match (cli.all, cli.format) {
        (false, OutputFormat::Text) => match select_longest_pair(&ledger) {
            Some(pair) => println!("{}", pair.key()),
            None => println!("no pair found"),
        },
        (false, OutputFormat::Json) => {
            println!("{}", serde_json::to_string(&select_longest_pair(&ledger))?);
        }
        (true, OutputFormat::Text) => {
            let ranked = rank_pairs(&ledger);
            if ranked.is_empty() {
                println!("no pair found");
            }
            for pair in ranked {
                println!("{},{}", pair.key(), pair.total_overlap_days());
            }
        }
        (true, OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&rank_pairs(&ledger))?);
        }
    }

    Ok(())
}
