//! Run and batch configuration.
//!
//! Both structs deserialize from YAML with every field optional:
//!
//! ```yaml
//! # batch.yaml
//! passengers: 120          # omit for a full cabin
//! seeds: 50
//! policies:
//!   - kind: random
//!   - kind: back_to_front
//!     zones: 3
//!   - kind: outside_in
//! conformance_rates: [0.0, 0.2]
//! run:
//!   seed: 1000
//!   max_ticks: 5000
//!   stow_delay: { kind: weibull, scale: 8.0, shape: 1.5 }
//!   shuffle_delay: { kind: uniform, min: 2, max: 6 }
//!   shuffle_aggregation: max
//!   walk_ticks_per_cell: 2
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use ab_cabin::{CabinLayout, Manifest, load_manifest_csv};
use ab_core::{DelayDistribution, SimClock};
use ab_interference::{DEFAULT_SHUFFLE_DELAY, ShuffleAggregation};
use ab_passenger::DEFAULT_STOW_DELAY;
use ab_policy::BoardingPolicy;

use crate::{ManifestSource, SimError, SimResult};

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Everything that defines one run apart from the cabin and the manifest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub policy:                  BoardingPolicy,
    /// Probability that a passenger leaves its policy position.
    pub conformance_rate:        f64,
    /// Master seed.  Same seed + same config ⇒ identical run.
    pub seed:                    u64,
    pub stow_delay:              DelayDistribution,
    /// Per-blocker stand-and-reseat delay.
    pub shuffle_delay:           DelayDistribution,
    pub shuffle_aggregation:     ShuffleAggregation,
    /// Minimum ticks between two admissions through the door.
    pub boarding_interval_ticks: u32,
    /// Ticks a walker needs per aisle cell.  1 is one cell per tick.
    pub walk_ticks_per_cell:     u32,
    /// Abort the run if not everyone is seated after this many ticks.
    pub max_ticks:               u64,
    pub tick_duration_ms:        u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            policy:                  BoardingPolicy::Random,
            conformance_rate:        0.0,
            seed:                    0,
            stow_delay:              DEFAULT_STOW_DELAY,
            shuffle_delay:           DEFAULT_SHUFFLE_DELAY,
            shuffle_aggregation:     ShuffleAggregation::Max,
            boarding_interval_ticks: 1,
            walk_ticks_per_cell:     1,
            max_ticks:               10_000,
            tick_duration_ms:        SimClock::DEFAULT_TICK_MS,
        }
    }
}

impl RunConfig {
    /// Check every field against `layout`.  All failures are `SimError::Config`.
    pub fn validate(&self, layout: &CabinLayout) -> SimResult<()> {
        layout.validate().map_err(|e| SimError::Config(e.to_string()))?;
        self.policy
            .validate(layout)
            .map_err(|e| SimError::Config(e.to_string()))?;
        if !(0.0..=1.0).contains(&self.conformance_rate) {
            return Err(SimError::Config(format!(
                "conformance_rate {} is outside [0, 1]",
                self.conformance_rate
            )));
        }
        self.stow_delay
            .validate("stow_delay")
            .map_err(|e| SimError::Config(e.to_string()))?;
        self.shuffle_delay
            .validate("shuffle_delay")
            .map_err(|e| SimError::Config(e.to_string()))?;
        if self.boarding_interval_ticks == 0 {
            return Err(SimError::Config("boarding_interval_ticks must be at least 1".into()));
        }
        if self.walk_ticks_per_cell == 0 {
            return Err(SimError::Config("walk_ticks_per_cell must be at least 1".into()));
        }
        if self.max_ticks == 0 {
            return Err(SimError::Config("max_ticks must be at least 1".into()));
        }
        if self.tick_duration_ms == 0 {
            return Err(SimError::Config("tick_duration_ms must be at least 1".into()));
        }
        Ok(())
    }

    pub fn with_seed(&self, seed: u64) -> Self {
        Self { seed, ..self.clone() }
    }

    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        debug!(path = %path.display(), policy = %config.policy, "loaded run config");
        Ok(config)
    }
}

// ── BatchConfig ───────────────────────────────────────────────────────────────

/// A sweep: policies × conformance rates × seeds over one cabin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    pub layout:            CabinLayout,
    /// CSV manifest.  Takes precedence over `passengers`.
    pub manifest:          Option<PathBuf>,
    /// Passenger count for a sampled manifest.  `None` fills the cabin.
    pub passengers:        Option<usize>,
    /// Runs per (policy, rate) pair, seeded `run.seed`, `run.seed + 1`, …
    pub seeds:             u64,
    /// Empty means `[run.policy]`.
    pub policies:          Vec<BoardingPolicy>,
    /// Empty means `[run.conformance_rate]`.
    pub conformance_rates: Vec<f64>,
    /// Template for every run.
    pub run:               RunConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            layout:            CabinLayout::a320(),
            manifest:          None,
            passengers:        None,
            seeds:             1,
            policies:          Vec::new(),
            conformance_rates: Vec::new(),
            run:               RunConfig::default(),
        }
    }
}

impl BatchConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        debug!(path = %path.display(), runs = config.run_count(), "loaded batch config");
        Ok(config)
    }

    pub fn run_count(&self) -> usize {
        self.policies.len().max(1) * self.conformance_rates.len().max(1) * self.seeds as usize
    }

    /// One `RunConfig` per run, policy-major then rate then seed.
    pub fn expand(&self) -> Vec<RunConfig> {
        let policies = if self.policies.is_empty() {
            vec![self.run.policy]
        } else {
            self.policies.clone()
        };
        let rates = if self.conformance_rates.is_empty() {
            vec![self.run.conformance_rate]
        } else {
            self.conformance_rates.clone()
        };

        let mut out = Vec::with_capacity(self.run_count());
        for policy in &policies {
            for rate in &rates {
                for i in 0..self.seeds {
                    out.push(RunConfig {
                        policy:           *policy,
                        conformance_rate: *rate,
                        seed:             self.run.seed.wrapping_add(i),
                        ..self.run.clone()
                    });
                }
            }
        }
        out
    }

    /// Where each run's manifest comes from.
    pub fn manifest_source(&self) -> SimResult<ManifestSource> {
        if let Some(path) = &self.manifest {
            let manifest: Manifest = load_manifest_csv(path, &self.layout)?;
            return Ok(ManifestSource::Fixed(manifest));
        }
        Ok(match self.passengers {
            Some(count) => {
                let seats = self.layout.seat_count();
                if count > seats {
                    return Err(SimError::Config(format!(
                        "{count} passengers do not fit in {seats} seats"
                    )));
                }
                ManifestSource::Sampled { count }
            }
            None => ManifestSource::Full,
        })
    }
}
