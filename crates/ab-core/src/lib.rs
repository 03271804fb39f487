//! `ab-core` — ids, ticks, generators and delay distributions shared by
//! every `ab-*` crate.
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`ids`]     | `PassengerId`, `RunId`                               |
//! | [`time`]    | `Tick`, `SimClock`                                   |
//! | [`rng`]     | `SimRng` (run streams), `PassengerRng`               |
//! | [`delay`]   | `DelayDistribution` for stowing and seat shuffles    |
//! | [`error`]   | `AbError`, `AbResult`                                |
//!
//! The `serde` feature derives `Serialize`/`Deserialize` for ids, ticks,
//! the clock and delay distributions, so they can appear in YAML configs.

pub mod delay;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


pub use delay::DelayDistribution;
pub use error::{AbError, AbResult};
pub use ids::{PassengerId, RunId};
pub use rng::{PassengerRng, SimRng};
pub use time::{SimClock, Tick};
