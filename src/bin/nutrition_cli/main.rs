// ABOUTME: Nutrition CLI - command-line front end for the Nutrition DNA analytics
// ABOUTME: Reads a JSON file of profile, logs and context, prints profiles, predictions, plans and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors
//!
//! Usage:
//! ```bash
//! # Build a Nutrition DNA profile
//! nutrition-cli profile --input user.json
//!
//! # Predict behavior for a day and estimate a goal
//! nutrition-cli predict --input user.json --date 2025-03-07 --goal "weight loss" --days 30
//!
//! # Weekly insights and predictions
//! nutrition-cli weekly --input user.json --week-start 2025-03-03
//!
//! # Seven-day food plan with reproducible wording
//! nutrition-cli --seed 42 plan --input user.json --start 2025-03-03 --days 7
//!
//! # Visualization report as of a fixed instant
//! nutrition-cli --at 2025-03-09T20:00:00Z report --input user.json
//! ```
//!
//! The input file holds `{"profile": {...}, "logs": [...], "context": [...]}`;
//! every field is optional. Output is JSON on stdout, logs go to stderr.

mod commands;
mod input;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use nutrition_dna::intelligence::config::IntelligenceConfig;
use nutrition_dna::intelligence::PhraseSelector;
use nutrition_dna::logging::LoggingConfig;
use nutrition_dna::time::{Clock, FixedClock, SystemClock};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use commands::Engines;
use input::CliInput;

#[derive(Parser)]
#[command(
    name = "nutrition-cli",
    about = "Nutrition DNA analytics CLI",
    long_about = "Builds behavioral eating profiles from meal logs and prints predictions, insights, food plans and chart payloads as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Seed for narrative phrase selection (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Treat this RFC 3339 instant as "now"
    #[arg(long, global = true)]
    at: Option<DateTime<Utc>>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Args)]
struct InputArgs {
    /// JSON file with profile, logs and context
    #[arg(long, short = 'i')]
    input: PathBuf,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate the Nutrition DNA profile
    Profile {
        #[command(flatten)]
        source: InputArgs,
    },

    /// Predict behavior for one day
    Predict {
        #[command(flatten)]
        source: InputArgs,

        /// Day to predict (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Goal to estimate success for, e.g. "weight loss"
        #[arg(long)]
        goal: Option<String>,

        /// Goal timeframe in days
        #[arg(long, default_value = "30")]
        days: u32,
    },

    /// Weekly insights and per-day predictions
    Weekly {
        #[command(flatten)]
        source: InputArgs,

        /// First day of the week (defaults to this week's Monday)
        #[arg(long)]
        week_start: Option<NaiveDate>,
    },

    /// Personalized multi-day food plan
    Plan {
        #[command(flatten)]
        source: InputArgs,

        /// First planned day (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Number of days to plan (1-31)
        #[arg(long, default_value = "7")]
        days: u32,
    },

    /// Full visualization report
    Report {
        #[command(flatten)]
        source: InputArgs,
    },
}

impl Command {
    fn input_path(&self) -> &PathBuf {
        match self {
            Self::Profile { source }
            | Self::Predict { source, .. }
            | Self::Weekly { source, .. }
            | Self::Plan { source, .. }
            | Self::Report { source } => &source.input,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = IntelligenceConfig::from_environment()
        .context("Invalid NUTRITION_DNA_* configuration")?;
    let clock: Arc<dyn Clock> = match cli.at {
        Some(instant) => Arc::new(FixedClock::new(instant)),
        None => Arc::new(SystemClock),
    };
    let phrases = cli.seed.map_or_else(
        || PhraseSelector::from_rng(ChaCha8Rng::from_entropy()),
        PhraseSelector::seeded,
    );
    let engines = Engines {
        config,
        clock,
        phrases,
    };

    let input = CliInput::load(cli.command.input_path()).await?;
    debug!(
        logs.count = input.logs.len(),
        context.count = input.context.len(),
        "Loaded input"
    );

    let output = match &cli.command {
        Command::Profile { .. } => commands::profile(&engines, &input),
        Command::Predict {
            date, goal, days, ..
        } => commands::predict(&engines, &input, *date, goal.as_deref(), *days),
        Command::Weekly { week_start, .. } => commands::weekly(&engines, &input, *week_start),
        Command::Plan { start, days, .. } => commands::plan(&engines, &input, *start, *days),
        Command::Report { .. } => commands::report(&engines, &input),
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
