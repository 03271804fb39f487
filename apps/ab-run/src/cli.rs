//! Command-line arguments and how they override the YAML configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use ab_cabin::CabinLayout;
use ab_policy::BoardingPolicy;
use ab_sim::BatchConfig;

#[derive(Parser)]
#[command(name = "ab-run")]
#[command(about = "Agent-based airplane boarding simulation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log at info level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// One run, optionally streaming per-tick rows
    Run {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Every policy × conformance rate × seed combination
    Batch {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        sweep: SweepArgs,
    },
}

#[derive(Args, Default)]
pub struct SweepArgs {
    /// Runs per (policy, rate) pair
    #[arg(long)]
    pub seeds: Option<u64>,

    /// Policies to compare, e.g. random,back-to-front:3,steffen-perfect
    #[arg(long, value_delimiter = ',')]
    pub policies: Vec<BoardingPolicy>,

    /// Conformance rates to compare, e.g. 0,0.1,0.3
    #[arg(long, value_delimiter = ',')]
    pub rates: Vec<f64>,
}

#[derive(Args)]
pub struct CommonArgs {
    /// YAML batch configuration; command-line flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Boarding policy, e.g. outside-in or back-to-front:4
    #[arg(short, long)]
    pub policy: Option<BoardingPolicy>,

    /// Zone count for zoned policies
    #[arg(long)]
    pub zones: Option<u16>,

    /// Master seed (first seed of a batch)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Probability a passenger leaves its queue position
    #[arg(long)]
    pub conformance: Option<f64>,

    /// Sample this many passengers instead of filling the cabin
    #[arg(long)]
    pub passengers: Option<usize>,

    /// Manifest CSV with passenger_id,row,column rows
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Seat rows (replaces the configured cabin)
    #[arg(long)]
    pub rows: Option<u16>,

    /// Seats on each side of the aisle (replaces the configured cabin)
    #[arg(long)]
    pub seats_per_side: Option<u16>,

    /// Abort runs that take longer than this many ticks
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Ticks a walker spends on each aisle cell
    #[arg(long)]
    pub walk_ticks: Option<u32>,

    /// Directory for runs.csv and shuffles.csv
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also write ticks.csv
    #[arg(long)]
    pub ticks: bool,
}

impl CommonArgs {
    /// Load the YAML file (or defaults) and apply every flag that was given.
    ///
    /// Sweep lists replace the configured ones before `--zones` is applied,
    /// so the zone count reaches every policy that ends up in the batch.
    pub fn batch_config(&self, sweep: &SweepArgs) -> Result<BatchConfig> {
        let mut batch = match &self.config {
            Some(path) => BatchConfig::load(path)?,
            None => BatchConfig::default(),
        };

        if self.rows.is_some() || self.seats_per_side.is_some() {
            batch.layout = CabinLayout::new(
                self.rows.unwrap_or(batch.layout.rows),
                self.seats_per_side.unwrap_or(batch.layout.seats_per_side),
            );
        }
        if let Some(policy) = self.policy {
            batch.run.policy = policy;
            batch.policies.clear();
        }
        if !sweep.policies.is_empty() {
            batch.policies = sweep.policies.clone();
        }
        if let Some(seeds) = sweep.seeds {
            batch.seeds = seeds;
        }
        if let Some(zones) = self.zones {
            batch.run.policy = batch.run.policy.with_zones(zones);
            for p in &mut batch.policies {
                *p = p.with_zones(zones);
            }
        }
        if let Some(seed) = self.seed {
            batch.run.seed = seed;
        }
        if let Some(rate) = self.conformance {
            batch.run.conformance_rate = rate;
            batch.conformance_rates.clear();
        }
        if !sweep.rates.is_empty() {
            batch.conformance_rates = sweep.rates.clone();
        }
        if let Some(count) = self.passengers {
            batch.passengers = Some(count);
        }
        if let Some(path) = &self.manifest {
            batch.manifest = Some(path.clone());
        }
        if let Some(max_ticks) = self.max_ticks {
            batch.run.max_ticks = max_ticks;
        }
        if let Some(walk_ticks) = self.walk_ticks {
            batch.run.walk_ticks_per_cell = walk_ticks;
        }
        Ok(batch)
    }
}
