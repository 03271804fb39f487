//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use ab_cabin::{CabinLayout, Grid, Manifest};
use ab_core::{RunId, SimClock, SimRng};
use ab_interference::InterferenceResolver;
use ab_passenger::PassengerStoreBuilder;
use ab_policy::{BoardingQueue, apply_conformance};

use crate::{MetricsCollector, RunConfig, Sim, SimError, SimResult};

/// `SimRng` stream for policy order generation.
pub const POLICY_STREAM: u64 = 0x1_0000_0001;
/// `SimRng` stream for conformance swaps.
pub const CONFORMANCE_STREAM: u64 = 0x1_0000_0002;
/// `SimRng` stream for sampled manifests.
pub const MANIFEST_STREAM: u64 = 0x1_0000_0003;

/// Fluent builder for [`Sim`].
///
/// | Method        | Default    |
/// |---------------|------------|
/// | `.run_id(id)` | `RunId(0)` |
///
/// ```rust,ignore
/// let layout = CabinLayout::a320();
/// let manifest = Manifest::full(&layout);
/// let mut sim = SimBuilder::new(RunConfig::default(), layout, manifest).build()?;
/// let summary = sim.run_to_completion(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   RunConfig,
    layout:   CabinLayout,
    manifest: Manifest,
    run_id:   RunId,
}

impl SimBuilder {
    pub fn new(config: RunConfig, layout: CabinLayout, manifest: Manifest) -> Self {
        Self { config, layout, manifest, run_id: RunId(0) }
    }

    /// Identify this run inside a batch.
    pub fn run_id(mut self, run_id: RunId) -> Self {
        self.run_id = run_id;
        self
    }

    /// Validate inputs, build the boarding queue and passenger store, and
    /// return a ready-to-run [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate(&self.layout)?;

        // Seat geometry is stored in the manifest; it must be this cabin's.
        for (e, seat) in self.manifest.entries().iter().zip(self.manifest.seats()) {
            match self.layout.seat_info(e.row, e.column) {
                None => {
                    return Err(SimError::Config(format!(
                        "{} is assigned to row {} column {}, which this cabin does not have",
                        e.passenger, e.row, e.column
                    )));
                }
                Some(here) if here != *seat => {
                    return Err(SimError::Config(format!(
                        "{} has seat {:?} {:?} at distance {} in its manifest, but this cabin \
                         puts row {} column {} at {:?} {:?} distance {}",
                        e.passenger, seat.hand, seat.side, seat.distance,
                        e.row, e.column, here.hand, here.side, here.distance
                    )));
                }
                Some(_) => {}
            }
        }

        // ── Boarding order ────────────────────────────────────────────────
        let mut policy_rng = SimRng::stream(config.seed, POLICY_STREAM);
        let mut order = config
            .policy
            .generate_order(&self.manifest, &self.layout, &mut policy_rng)?;
        let mut conformance_rng = SimRng::stream(config.seed, CONFORMANCE_STREAM);
        apply_conformance(&mut order, config.conformance_rate, &mut conformance_rng)?;

        // ── Passengers and cabin ──────────────────────────────────────────
        let (passengers, rngs) = PassengerStoreBuilder::new(&self.manifest, config.seed)
            .stow_delay(config.stow_delay.clone())
            .build();
        let grid = Grid::new(self.layout)?;
        let resolver =
            InterferenceResolver::new(config.shuffle_delay.clone(), config.shuffle_aggregation);

        info!(
            run = self.run_id.0,
            policy = %config.policy,
            conformance = config.conformance_rate,
            seed = config.seed,
            passengers = passengers.count,
            "sim built"
        );

        Ok(Sim {
            clock: SimClock::new(config.tick_duration_ms),
            run_id: self.run_id,
            config,
            grid,
            passengers,
            rngs,
            queue: BoardingQueue::new(order),
            resolver,
            metrics: MetricsCollector::new(),
            last_admission: None,
            finished: false,
        })
    }
}
