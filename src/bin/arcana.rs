//! arcana CLI - The Arcana Observatory
//!
//! A thin demonstration shell over the arcana_core library. Each subcommand
//! calls one derivation component and prints its structured value as JSON,
//! exactly the shape a presentation layer would bind.
//!
//! # Design Philosophy
//!
//! - **Library-first**: all logic lives in arcana_core; this binary only
//!   parses arguments, loads tables, and prints
//! - **Structured output**: JSON on stdout, diagnostics on stderr

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use arcana_core::{classify, compute_cross, ChartConfig, ChartInput, ChartProjector, SymbolLibrary};

/// 🔮 Arcana Observatory: derive the symbolic core of a profile.
#[derive(Parser, Debug)]
#[command(name = "arcana")]
#[command(version = arcana_core::VERSION)]
#[command(about = "🔮 Arcana Observatory: derive the symbolic core of a profile")]
#[command(after_help = "EXAMPLES:
  # Cross-reference an archetype against the 20-day cycle
  arcana cross batz

  # Classify the day's energy for a sign and number pair
  arcana insight Cancer 7 3

  # Project a chart layout from a JSON input file
  arcana chart natal.json --pretty

  # Use overridden symbol tables
  arcana --tables tables.json cross imox
")]
struct Cli {
    /// JSON file overriding the canonical symbol tables
    #[arg(long = "tables", value_name = "FILE", global = true)]
    tables: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long = "pretty", global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the archetype cross for a center archetype
    Cross {
        /// Center archetype identifier (case-sensitive)
        center: String,
    },
    /// Classify the day's energy from a sign and two numbers
    Insight {
        /// Zodiac sign name
        sign: String,
        /// Personal number
        personal: i32,
        /// Universal day number
        universal: i32,
    },
    /// Project a chart layout from a JSON input file
    Chart {
        /// Chart input file ({"houses": [...], "bodies": [...]})
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let library = match &cli.tables {
        Some(path) => SymbolLibrary::load_from_path(path)
            .with_context(|| format!("loading symbol tables from {}", path.display()))?,
        None => SymbolLibrary::new(),
    };

    let value = match &cli.command {
        Command::Cross { center } => {
            let cross = compute_cross(center, &library.archetypes)?;
            serde_json::to_value(cross)?
        }
        Command::Insight {
            sign,
            personal,
            universal,
        } => {
            let insight = classify(sign, *personal, *universal, &library.elements);
            serde_json::to_value(insight)?
        }
        Command::Chart { input } => {
            let raw = std::fs::read_to_string(input)
                .with_context(|| format!("reading chart input {}", input.display()))?;
            let chart: ChartInput = serde_json::from_str(&raw).context("parsing chart input")?;
            let projector = ChartProjector::with_library(ChartConfig::default(), &library);
            serde_json::to_value(projector.project_input(&chart))?
        }
    };

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", serde_json::to_string(&value)?);
    }

    Ok(())
}
