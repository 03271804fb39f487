//! `ab-sim` — the boarding tick loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`config`]   | `RunConfig`, `BatchConfig` (YAML)                          |
//! | [`builder`]  | `SimBuilder`, RNG stream constants                         |
//! | [`sim`]      | `Sim`, `StepOutcome`                                       |
//! | [`observer`] | `SimObserver`, `NoopObserver`                              |
//! | [`metrics`]  | `TickMetrics`, `ShuffleRecord`, `MetricsCollector`, `RunRecord`, `aggregate` |
//! | [`batch`]    | `ManifestSource`, `run_one`, `run_batch`                   |
//! | [`error`]    | `SimError`, `SimResult<T>`                                 |
//!
//! # Randomness
//!
//! One run seed feeds four independent streams:
//!
//! | Stream             | Used for                                  |
//! |--------------------|-------------------------------------------|
//! | `POLICY_STREAM`    | random grouping inside the policy         |
//! | `CONFORMANCE_STREAM` | deviations from the policy order        |
//! | `MANIFEST_STREAM`  | sampled partial manifests                 |
//! | per passenger      | stow delay, shuffle delays                |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                      |
//! |------------|---------------------------------------------|
//! | `parallel` | `run_batch` uses Rayon's thread pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ab_cabin::{CabinLayout, Manifest};
//! use ab_sim::{NoopObserver, RunConfig, SimBuilder};
//!
//! let layout = CabinLayout::a320();
//! let manifest = Manifest::full(&layout);
//! let mut sim = SimBuilder::new(RunConfig::default(), layout, manifest).build()?;
//! let summary = sim.run_to_completion(&mut NoopObserver)?;
//! println!("boarded in {:.0} s", summary.boarding_time_secs);
//! ```

pub mod batch;
pub mod builder;
pub mod config;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;


pub use batch::{ManifestSource, RunOutcome, run_batch, run_one};
pub use builder::{CONFORMANCE_STREAM, MANIFEST_STREAM, POLICY_STREAM, SimBuilder};
pub use config::{BatchConfig, RunConfig};
pub use error::{SimError, SimResult};
pub use metrics::{
    BatchSummary, MetricsCollector, PassengerRecord, RunRecord, RunSummary, ShuffleRecord,
    TickMetrics, aggregate, aggregate_by_policy,
};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, StepOutcome};
