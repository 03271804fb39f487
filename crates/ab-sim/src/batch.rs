//! Independent runs over one cabin.
//!
//! Every run owns its grid, passengers and generators, so runs share
//! nothing but read-only inputs.  With the `parallel` feature they execute
//! on Rayon's thread pool; results always come back in input order.

use ab_cabin::{CabinLayout, Manifest};
use ab_core::{RunId, SimRng};

use crate::{MANIFEST_STREAM, MetricsCollector, NoopObserver, RunConfig, RunRecord, SimBuilder, SimResult};

/// Where a run's manifest comes from.
#[derive(Clone, Debug)]
pub enum ManifestSource {
    /// Every seat taken.
    Full,
    /// `count` seats drawn per run from the run seed's manifest stream.
    Sampled { count: usize },
    /// The same manifest for every run.
    Fixed(Manifest),
}

impl ManifestSource {
    pub fn manifest_for(&self, layout: &CabinLayout, seed: u64) -> SimResult<Manifest> {
        Ok(match self {
            ManifestSource::Full => Manifest::full(layout),
            ManifestSource::Sampled { count } => {
                let mut rng = SimRng::stream(seed, MANIFEST_STREAM);
                Manifest::sample(layout, *count, &mut rng)?
            }
            ManifestSource::Fixed(m) => m.clone(),
        })
    }
}

/// A finished (or aborted) run.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub record:  RunRecord,
    pub metrics: MetricsCollector,
}

/// Build and run one configuration to completion or `max_ticks`.
pub fn run_one(
    run_id: RunId,
    layout: &CabinLayout,
    source: &ManifestSource,
    config: &RunConfig,
) -> SimResult<RunOutcome> {
    let manifest = source.manifest_for(layout, config.seed)?;
    let mut sim = SimBuilder::new(config.clone(), layout.clone(), manifest)
        .run_id(run_id)
        .build()?;
    let record = sim.run_record(&mut NoopObserver)?;
    Ok(RunOutcome { record, metrics: sim.into_metrics() })
}

/// Run every configuration; `RunId`s are input positions.
///
/// Aborted runs are returned with `record.aborted = true`.  Any other error
/// (bad configuration, a movement defect) fails the whole batch.
pub fn run_batch(
    layout:  &CabinLayout,
    source:  &ManifestSource,
    configs: &[RunConfig],
) -> SimResult<Vec<RunOutcome>> {
    #[cfg(not(feature = "parallel"))]
    {
        configs
            .iter()
            .enumerate()
            .map(|(i, c)| run_one(RunId::from_index(i), layout, source, c))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        configs
            .par_iter()
            .enumerate()
            .map(|(i, c)| run_one(RunId::from_index(i), layout, source, c))
            .collect()
    }
}
