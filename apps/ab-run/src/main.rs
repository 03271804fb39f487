//! ab-run — command-line driver for the airplane boarding simulation.
//!
//! ```text
//! ab-run run --policy outside-in --seed 7 --output-dir out --ticks
//! ab-run batch --policies random,back-to-front:3,steffen-perfect --seeds 100
//! ab-run batch --config sweep.yaml -o out
//! ```
//!
//! Logging goes to stderr through `RUST_LOG` (default `warn`).

mod cli;

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ab_output::{CsvWriter, OutputWriter, SimOutputObserver, write_outcomes};
use ab_sim::{BatchConfig, NoopObserver, RunRecord, SimBuilder, aggregate_by_policy, run_batch};

use cli::{Cli, Command, CommonArgs, SweepArgs};

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Run { common } => run_single(&common),
        Command::Batch { common, sweep } => {
            let batch = common.batch_config(&sweep)?;
            run_sweep(&common, &batch)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ── Single run ────────────────────────────────────────────────────────────────

fn run_single(common: &CommonArgs) -> Result<()> {
    let batch = BatchConfig { seeds: 1, ..common.batch_config(&SweepArgs::default())? };
    let Some(config) = batch.expand().into_iter().next() else {
        bail!("configuration produced no runs");
    };
    let manifest = batch
        .manifest_source()?
        .manifest_for(&batch.layout, config.seed)?;

    println!("=== ab-run — single run ===");
    println!(
        "Cabin: {} rows × {}+{}  |  Passengers: {}  |  Policy: {}  |  Conformance: {}  |  Seed: {}",
        batch.layout.rows,
        batch.layout.seats_per_side,
        batch.layout.seats_per_side,
        manifest.len(),
        config.policy,
        config.conformance_rate,
        config.seed,
    );

    let mut sim = SimBuilder::new(config, batch.layout.clone(), manifest).build()?;
    let t0 = Instant::now();

    let record = match &common.output_dir {
        Some(dir) => {
            let writer = CsvWriter::new(dir, common.ticks)
                .with_context(|| format!("opening output in {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(writer, sim.run_id());
            let record = sim.run_record(&mut obs)?;
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
            obs.finish_run(&record, &sim.metrics().shuffles)?;
            obs.into_writer().finish()?;
            println!("Output written to {}", dir.display());
            record
        }
        None => sim.run_record(&mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();

    println!();
    print_record(&record);
    println!("  peak aisle occupancy : {}", sim.metrics().peak_aisle_occupancy());
    println!("  wall time            : {:.3} s", elapsed.as_secs_f64());
    Ok(())
}

fn print_record(r: &RunRecord) {
    if r.aborted {
        println!("ABORTED after {} ticks", r.total_boarding_ticks);
    }
    println!("  boarding ticks       : {}", r.total_boarding_ticks);
    println!("  boarding time        : {:.1} s", r.boarding_time_secs);
    println!("  mean passenger wait  : {:.2} ticks", r.mean_passenger_wait);
    println!("  total shuffle ticks  : {}", r.total_shuffle_wait);
}

// ── Batch ─────────────────────────────────────────────────────────────────────

fn run_sweep(common: &CommonArgs, batch: &BatchConfig) -> Result<()> {
    let configs = batch.expand();
    if configs.is_empty() {
        bail!("configuration produced no runs (seeds = {})", batch.seeds);
    }
    let source = batch.manifest_source()?;

    println!("=== ab-run — batch of {} runs ===", configs.len());
    let t0 = Instant::now();
    let outcomes = run_batch(&batch.layout, &source, &configs)?;
    let elapsed = t0.elapsed();
    info!(runs = outcomes.len(), secs = elapsed.as_secs_f64(), "batch finished");

    if let Some(dir) = &common.output_dir {
        let mut writer = CsvWriter::new(dir, common.ticks)
            .with_context(|| format!("opening output in {}", dir.display()))?;
        write_outcomes(&mut writer, &outcomes)?;
        writer.finish()?;
        println!("Output written to {}", dir.display());
    }

    let records: Vec<RunRecord> = outcomes.into_iter().map(|o| o.record).collect();
    println!();
    println!(
        "{:<20} {:>6} {:>8} {:>10} {:>8} {:>8} {:>8} {:>10}",
        "Policy", "Runs", "Aborted", "Mean", "Std", "Min", "Max", "Mean (s)"
    );
    println!("{}", "-".repeat(84));
    for (policy, summary) in aggregate_by_policy(&records) {
        match summary {
            Some(s) => println!(
                "{:<20} {:>6} {:>8} {:>10.1} {:>8.1} {:>8} {:>8} {:>10.1}",
                policy,
                s.runs,
                s.aborted,
                s.mean_boarding_ticks,
                s.std_boarding_ticks,
                s.min_boarding_ticks,
                s.max_boarding_ticks,
                s.mean_boarding_secs,
            ),
            None => println!("{policy:<20} {:>6} every run aborted", 0),
        }
    }
    println!();
    println!("Batch complete in {:.3} s", elapsed.as_secs_f64());
    Ok(())
}
